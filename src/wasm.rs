//! WebAssembly bindings for the Game of Life simulation.
//!
//! Provides a thin wrapper around `Simulation` for browser environments.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    compute::{Simulation, SimulationStats},
    render,
    schema::{Seed, SimulationConfig},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// WebAssembly wrapper for the Game of Life simulation.
#[wasm_bindgen]
pub struct WasmSimulation {
    sim: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a new simulation from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing SimulationConfig
    /// * `seed_json` - JSON string containing Seed
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed_json: &str) -> Result<WasmSimulation, JsValue> {
        let config: SimulationConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;

        Ok(WasmSimulation {
            sim: Simulation::from_seed(&seed, &config),
        })
    }

    /// Advance one generation.
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.sim.step();
    }

    /// Advance multiple generations.
    #[wasm_bindgen]
    pub fn run(&mut self, steps: u64) {
        self.sim.run(steps);
    }

    /// Get current simulation state as JSON.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let grid = self.sim.grid();
        let snapshot = StateSnapshot {
            cells: grid.cells().iter().map(|&alive| alive as u8).collect(),
            rows: grid.rows(),
            cols: grid.cols(),
            generation: self.sim.generation(),
            alive: grid.population(),
        };

        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Get flat cell states (1 = live, 0 = dead) in row-major order.
    #[wasm_bindgen(js_name = getCells)]
    pub fn get_cells(&self) -> Vec<u8> {
        self.sim
            .grid()
            .cells()
            .iter()
            .map(|&alive| alive as u8)
            .collect()
    }

    /// Get simulation statistics as JSON.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = SimulationStats::from_grid(self.sim.grid());
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Render the current grid as a text frame.
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        render::render(self.sim.grid())
    }

    /// Reset the simulation with a new seed.
    #[wasm_bindgen]
    pub fn reset(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;
        self.sim.reset(&seed);
        Ok(())
    }

    /// Flip one cell. Out-of-bounds positions are ignored.
    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.sim.toggle(row, col);
    }

    /// Fill the grid with noise and restart the generation counter.
    ///
    /// Without an explicit seed, one is drawn from `Math.random`.
    #[wasm_bindgen]
    pub fn randomize(&mut self, density: f32, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
        self.sim.randomize(density, seed);
    }

    /// Kill every cell and restart the generation counter.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.sim.clear();
    }

    /// Resize the grid, keeping the overlapping region.
    #[wasm_bindgen]
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.sim.resize(rows, cols);
    }

    /// Get row count.
    #[wasm_bindgen(js_name = getRows)]
    pub fn get_rows(&self) -> usize {
        self.sim.grid().rows()
    }

    /// Get column count.
    #[wasm_bindgen(js_name = getCols)]
    pub fn get_cols(&self) -> usize {
        self.sim.grid().cols()
    }

    /// Get current generation count.
    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.sim.generation()
    }

    /// Get current live-cell count.
    #[wasm_bindgen(js_name = getPopulation)]
    pub fn get_population(&self) -> usize {
        self.sim.grid().population()
    }
}

/// Serializable snapshot of simulation state.
#[derive(Serialize)]
struct StateSnapshot {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
    generation: u64,
    alive: usize,
}
