//! The Life transition rule.
//!
//! Conway's B3/S23 on a bounded grid: positions outside the grid count as
//! dead, and every cell transitions against the same input snapshot.

use super::Grid;

/// Offsets of the Moore neighborhood around a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells among the Moore neighbors of (row, col).
///
/// Positions outside the grid contribute zero, so corner cells examine
/// only 3 neighbors and edge cells only 5.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if r >= 0
            && c >= 0
            && (r as usize) < grid.rows()
            && (c as usize) < grid.cols()
            && grid.get(r as usize, c as usize)
        {
            count += 1;
        }
    }
    count
}

/// Apply the B3/S23 rule to a single cell.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Compute the next generation.
///
/// Returns a new grid of the same dimensions filled from a read-only view
/// of `grid`; the input is never modified.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let alive = grid.get(row, col);
            next.set(row, col, next_state(alive, live_neighbors(grid, row, col)));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Pattern;

    fn grid_with(pattern: &Pattern, row: i32, col: i32, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        grid.place(pattern, row, col);
        grid
    }

    #[test]
    fn test_step_preserves_dimensions() {
        let grid = grid_with(&Pattern::glider(), 1, 1, 9, 13);
        let next = step(&grid);
        assert_eq!(next.rows(), 9);
        assert_eq!(next.cols(), 13);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with(&Pattern::glider(), 1, 1, 8, 8);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before, "Input grid must stay untouched");
    }

    #[test]
    fn test_block_is_a_fixed_point() {
        let grid = grid_with(&Pattern::block(), 2, 2, 6, 6);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_2() {
        let grid = grid_with(&Pattern::blinker(), 2, 1, 5, 5);
        let once = step(&grid);
        assert_ne!(once, grid);
        assert_eq!(step(&once), grid);
    }

    #[test]
    fn test_glider_translates_down_right_every_4_steps() {
        let mut grid = grid_with(&Pattern::glider(), 1, 1, 10, 10);
        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(grid, grid_with(&Pattern::glider(), 2, 2, 10, 10));
    }

    #[test]
    fn test_pulsar_oscillates_with_period_3() {
        let initial = grid_with(&Pattern::pulsar(), 2, 2, 17, 17);
        let mut grid = initial.clone();
        for _ in 0..3 {
            grid = step(&grid);
        }
        assert_eq!(grid, initial);
    }

    #[test]
    fn test_underpopulation_kills() {
        // A lone pair: each cell sees one neighbor, nothing sees three
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, true);
        grid.set(1, 2, true);
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_overpopulation_kills() {
        // Plus shape: the center sees four neighbors
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, true);
        grid.set(1, 2, true);
        grid.set(3, 2, true);
        grid.set(2, 1, true);
        grid.set(2, 3, true);
        assert!(!step(&grid).get(2, 2), "A cell with 4 neighbors dies");
    }

    #[test]
    fn test_birth_on_exactly_three() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 1, true);
        grid.set(1, 0, true);
        grid.set(1, 1, true);
        assert!(
            step(&grid).get(0, 0),
            "A dead cell with 3 neighbors is born"
        );
    }

    #[test]
    fn test_corner_examines_only_three_cells() {
        let mut grid = Grid::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                grid.set(row, col, true);
            }
        }
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 0, 3), 3);
        assert_eq!(live_neighbors(&grid, 3, 0), 3);
        assert_eq!(live_neighbors(&grid, 3, 3), 3);
        assert_eq!(live_neighbors(&grid, 0, 1), 5, "Edge cells see five");
        assert_eq!(live_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn test_next_state_full_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live, {n} neighbors");
            assert_eq!(next_state(false, n), n == 3, "dead, {n} neighbors");
        }
    }
}
