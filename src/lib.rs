//! Conway's Game of Life on a bounded grid.
//!
//! This crate implements the classic B3/S23 cellular automaton on a
//! fixed-size, non-wrapping grid, together with a text renderer that
//! projects each generation into a printable frame.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: The grid data model, transition rule, and simulation driver
//! - `render`: Text projection of grids into display frames
//!
//! # Example
//!
//! ```rust
//! use conway_life::{
//!     compute::Simulation,
//!     render::render,
//!     schema::{Placement, Seed, SimulationConfig},
//! };
//!
//! // Create configuration
//! let config = SimulationConfig {
//!     rows: 8,
//!     cols: 8,
//!     ..Default::default()
//! };
//!
//! // Seed a glider and advance it one full period
//! let seed = Seed {
//!     placements: vec![Placement::Glider { row: 1, col: 1 }],
//! };
//! let mut sim = Simulation::from_seed(&seed, &config);
//! sim.run(4);
//!
//! assert_eq!(sim.generation(), 4);
//! println!("{}", render(sim.grid()));
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Grid, Pattern, Simulation, SimulationStats};
pub use schema::{Placement, Seed, SimulationConfig};
