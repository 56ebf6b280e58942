//! Text rendering of grids.
//!
//! Projects a grid into a printable frame: one glyph per cell, rows joined
//! by newlines with no trailing newline.

use crate::compute::Grid;

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = '█';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Render a grid as a text frame.
///
/// Row `r` of the output holds the glyphs for grid row `r`; rows are
/// joined with `\n` and there is no trailing newline. A zero-dimension
/// grid renders as the empty string.
pub fn render(grid: &Grid) -> String {
    let mut frame = String::new();
    render_into(grid, &mut frame);
    frame
}

/// Render a grid into a caller-provided buffer, replacing its contents.
///
/// Produces exactly the same output as [`render`]; reusing one buffer
/// across frames avoids reallocating in display loops.
pub fn render_into(grid: &Grid, frame: &mut String) {
    frame.clear();
    if grid.rows() == 0 || grid.cols() == 0 {
        return;
    }
    frame.reserve(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        if row > 0 {
            frame.push('\n');
        }
        for col in 0..grid.cols() {
            frame.push(if grid.get(row, col) {
                ALIVE_GLYPH
            } else {
                DEAD_GLYPH
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dead_grid_renders_spaces() {
        let frame = render(&Grid::new(3, 4));
        let lines: Vec<&str> = frame.split('\n').collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line, "    ");
        }
        assert!(!frame.ends_with('\n'), "No trailing newline");
    }

    #[test]
    fn test_live_cells_render_blocks() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 0, true);
        grid.set(0, 1, true);
        grid.set(1, 2, true);
        assert_eq!(render(&grid), "██ \n  █");
    }

    #[test]
    fn test_single_row_has_no_newline() {
        let mut grid = Grid::new(1, 5);
        grid.set(0, 2, true);
        assert_eq!(render(&grid), "  █  ");
    }

    #[test]
    fn test_degenerate_grid_renders_empty() {
        assert_eq!(render(&Grid::default()), "");
    }

    #[test]
    fn test_render_into_replaces_buffer() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, true);

        let mut frame = String::from("stale contents");
        render_into(&grid, &mut frame);
        assert_eq!(frame, render(&grid));
    }
}
