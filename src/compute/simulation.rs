//! Simulation driver - owns the current generation.
//!
//! Wraps a grid, its configuration, and a generation counter; each step
//! replaces the grid with the freshly computed next generation.

use crate::schema::{Seed, SimulationConfig};

use super::{Grid, step};

/// Owns the live grid and advances it one generation at a time.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation with an all-dead grid.
    pub fn new(config: SimulationConfig) -> Self {
        config.validate().expect("Invalid configuration");
        let grid = Grid::new(config.rows, config.cols);
        Self {
            config,
            grid,
            generation: 0,
        }
    }

    /// Create a simulation seeded with initial placements.
    pub fn from_seed(seed: &Seed, config: &SimulationConfig) -> Self {
        config.validate().expect("Invalid configuration");
        let grid = seed.generate(config.rows, config.cols);
        Self {
            config: config.clone(),
            grid,
            generation: 0,
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
    }

    /// Advance the specified number of generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Re-seed the grid and restart the generation counter.
    pub fn reset(&mut self, seed: &Seed) {
        self.grid = seed.generate(self.config.rows, self.config.cols);
        self.generation = 0;
    }

    /// Fill the grid with deterministic noise and restart the counter.
    pub fn randomize(&mut self, density: f32, seed: u64) {
        self.grid.randomize(density, seed);
        self.generation = 0;
    }

    /// Flip one cell. Out-of-bounds positions are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    /// Kill every cell and restart the counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Replace the grid with one of new dimensions, keeping the
    /// overlapping region. The generation counter is preserved.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.grid = self.grid.resized(rows, cols);
        self.config.rows = rows;
        self.config.cols = cols;
    }

    /// Current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the last seed, randomize, or clear.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get configuration reference.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub alive: usize,
    pub dead: usize,
    pub density: f32,
}

impl SimulationStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let total = grid.rows() * grid.cols();
        let alive = grid.population();
        Self {
            alive,
            dead: total - alive,
            density: if total == 0 {
                0.0
            } else {
                alive as f32 / total as f32
            },
        }
    }
}
