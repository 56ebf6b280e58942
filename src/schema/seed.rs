//! Seed types for initializing Game of Life grids.

use serde::{Deserialize, Serialize};

use crate::compute::{Grid, Pattern};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Placements applied in order to an all-dead grid.
    pub placements: Vec<Placement>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            placements: vec![
                Placement::Glider { row: 1, col: 1 },
                Placement::Glider { row: 10, col: 10 },
            ],
        }
    }
}

/// A single placement in a seed.
///
/// Origins are signed: a placement may hang off any edge and only its
/// in-bounds intersection is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Placement {
    /// The 3x3 glider, travelling toward the bottom-right.
    Glider { row: i32, col: i32 },
    /// The 2x2 block still life.
    Block { row: i32, col: i32 },
    /// The 1x3 blinker, oscillating with period 2.
    Blinker { row: i32, col: i32 },
    /// The 4x3 small exploder.
    SmallExploder { row: i32, col: i32 },
    /// The 13x13 pulsar, oscillating with period 3.
    Pulsar { row: i32, col: i32 },
    /// Deterministic noise over the whole grid.
    Random {
        /// Probability that each cell starts live (clamped to [0, 1]).
        density: f32,
        /// Random seed.
        seed: u64,
    },
    /// Explicit cell matrix (rows of 0/1 values, all the same length).
    Cells {
        cells: Vec<Vec<u8>>,
        row: i32,
        col: i32,
    },
}

impl Seed {
    /// Generate an initial grid from this seed.
    pub fn generate(&self, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);

        for placement in &self.placements {
            match placement {
                Placement::Glider { row, col } => {
                    grid.place(&Pattern::glider(), *row, *col);
                }
                Placement::Block { row, col } => {
                    grid.place(&Pattern::block(), *row, *col);
                }
                Placement::Blinker { row, col } => {
                    grid.place(&Pattern::blinker(), *row, *col);
                }
                Placement::SmallExploder { row, col } => {
                    grid.place(&Pattern::small_exploder(), *row, *col);
                }
                Placement::Pulsar { row, col } => {
                    grid.place(&Pattern::pulsar(), *row, *col);
                }
                Placement::Random { density, seed } => {
                    grid.randomize(*density, *seed);
                }
                Placement::Cells { cells, row, col } => {
                    grid.place(&Pattern::from_rows(cells.clone()), *row, *col);
                }
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_places_two_gliders() {
        let grid = Seed::default().generate(20, 50);
        assert_eq!(grid.population(), 10, "Two gliders hold 5 cells each");
        assert!(grid.get(1, 2), "First glider top cell");
        assert!(grid.get(10, 11), "Second glider top cell");
    }

    #[test]
    fn test_placement_json_tagging() {
        let placement: Placement =
            serde_json::from_str(r#"{"type": "Glider", "row": 1, "col": 1}"#)
                .expect("valid placement JSON");
        assert!(matches!(placement, Placement::Glider { row: 1, col: 1 }));

        let placement: Placement = serde_json::from_str(
            r#"{"type": "Random", "density": 0.25, "seed": 42}"#,
        )
        .expect("valid placement JSON");
        assert!(matches!(placement, Placement::Random { seed: 42, .. }));
    }

    #[test]
    fn test_cells_placement_matches_matrix() {
        let seed = Seed {
            placements: vec![Placement::Cells {
                cells: vec![vec![1, 0], vec![0, 1]],
                row: 0,
                col: 0,
            }],
        };
        let grid = seed.generate(4, 4);
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 1));
        assert_eq!(grid.population(), 2);
    }
}
