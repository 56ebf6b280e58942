//! Configuration types for Game of Life simulation parameters.

use serde::{Deserialize, Serialize};

/// Default frame delay for the display loop, in milliseconds.
fn default_frame_delay_ms() -> u64 {
    150
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells (number of rows).
    pub rows: usize,
    /// Grid width in cells (number of columns).
    pub cols: usize,
    /// Delay between displayed frames in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            frame_delay_ms: 150,
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (rows * cols).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
}
