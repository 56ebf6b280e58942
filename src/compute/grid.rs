//! Bounded grid of cells - the simulation data model.
//!
//! Cells are stored as a flat row-major vector with (0, 0) at the top-left.
//! Dimensions are fixed for the lifetime of a grid value; edges do not wrap.

use super::Pattern;

/// A bounded rectangular grid of live/dead cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Cell states in row-major order [row * cols + col].
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero. A zero-dimension grid only
    /// exists as `Grid::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid dimensions must be non-zero");
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert (row, col) coordinates to flat index.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell state at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.idx(row, col)]
    }

    /// Set the cell state at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
    }

    /// Flat view of all cell states in row-major order.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Flip the cell at (row, col). Out-of-bounds positions are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let idx = self.idx(row, col);
            self.cells[idx] = !self.cells[idx];
        }
    }

    /// Write a pattern into the grid with its top-left cell at the given
    /// origin.
    ///
    /// Every pattern cell overwrites its target, live or dead. Origins may
    /// be negative; targets outside the grid are skipped, so only the
    /// in-bounds intersection is written.
    pub fn place(&mut self, pattern: &Pattern, origin_row: i32, origin_col: i32) {
        for i in 0..pattern.rows() {
            for j in 0..pattern.cols() {
                let row = origin_row + i as i32;
                let col = origin_col + j as i32;
                if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
                    continue;
                }
                let idx = self.idx(row as usize, col as usize);
                self.cells[idx] = pattern.get(i, j);
            }
        }
    }

    /// Fill the grid with deterministic noise: each cell becomes live with
    /// probability `density` (clamped to [0, 1]).
    pub fn randomize(&mut self, density: f32, seed: u64) {
        // Simple LCG PRNG for deterministic noise
        let mut state = seed;
        let lcg_next = |s: &mut u64| -> f32 {
            *s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            (*s >> 33) as f32 / (1u64 << 31) as f32
        };

        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = lcg_next(&mut state) < density;
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Build a grid with new dimensions, copying the overlapping region
    /// from this one. Cells outside the overlap start dead.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn resized(&self, rows: usize, cols: usize) -> Grid {
        let mut next = Grid::new(rows, cols);
        for row in 0..self.rows.min(rows) {
            for col in 0..self.cols.min(cols) {
                next.set(row, col, self.get(row, col));
            }
        }
        next
    }
}
