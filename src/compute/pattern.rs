//! Pattern library - small cell matrices stamped onto grids.

/// A row-major matrix of cell states, written onto grids by
/// [`Grid::place`](super::Grid::place).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Pattern {
    /// Build a pattern from rows of 0/1 values.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let cols = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "Pattern rows must all have the same length"
        );
        let cells = rows.iter().flatten().map(|&v| v != 0).collect();
        Self {
            cells,
            rows: rows.len(),
            cols,
        }
    }

    /// The 3x3 glider, travelling one cell down-right every 4 generations.
    pub fn glider() -> Self {
        Self::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]])
    }

    /// The 2x2 block still life.
    pub fn block() -> Self {
        Self::from_rows(vec![vec![1, 1], vec![1, 1]])
    }

    /// The 1x3 blinker, oscillating with period 2.
    pub fn blinker() -> Self {
        Self::from_rows(vec![vec![1, 1, 1]])
    }

    /// The 4x3 small exploder.
    pub fn small_exploder() -> Self {
        Self::from_rows(vec![
            vec![0, 1, 0],
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![0, 1, 0],
        ])
    }

    /// The 13x13 pulsar, oscillating with period 3.
    pub fn pulsar() -> Self {
        Self::from_rows(vec![
            vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        ])
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

    /// Get the cell state at (row, col) within the pattern.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_cells(pattern: &Pattern) -> usize {
        (0..pattern.rows())
            .flat_map(|i| (0..pattern.cols()).map(move |j| (i, j)))
            .filter(|&(i, j)| pattern.get(i, j))
            .count()
    }

    #[test]
    fn test_preset_shapes() {
        let glider = Pattern::glider();
        assert_eq!((glider.rows(), glider.cols()), (3, 3));
        assert_eq!(live_cells(&glider), 5);

        let block = Pattern::block();
        assert_eq!((block.rows(), block.cols()), (2, 2));
        assert_eq!(live_cells(&block), 4);

        let blinker = Pattern::blinker();
        assert_eq!((blinker.rows(), blinker.cols()), (1, 3));
        assert_eq!(live_cells(&blinker), 3);

        let exploder = Pattern::small_exploder();
        assert_eq!((exploder.rows(), exploder.cols()), (4, 3));
        assert_eq!(live_cells(&exploder), 7);

        let pulsar = Pattern::pulsar();
        assert_eq!((pulsar.rows(), pulsar.cols()), (13, 13));
        assert_eq!(live_cells(&pulsar), 48);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_ragged_rows_panic() {
        let _ = Pattern::from_rows(vec![vec![1, 0], vec![1]]);
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = Pattern::from_rows(vec![]);
        assert_eq!((pattern.rows(), pattern.cols()), (0, 0));
    }
}
