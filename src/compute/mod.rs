//! Compute module - Grid state and the Life transition rule.

mod grid;
mod pattern;
mod rule;
mod simulation;

pub use grid::*;
pub use pattern::*;
pub use rule::*;
pub use simulation::*;
