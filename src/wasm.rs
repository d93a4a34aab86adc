//! WebAssembly bindings for the predation automaton.
//!
//! Provides a thin wrapper around `Automaton` for browser environments. The
//! page owns the animation frame loop and calls `tick` once per frame.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    compute::{Automaton, GridStats, Species},
    render,
    schema::{AutomatonConfig, NeighborMode, RuleConfig, RuleVariant, Seed},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{context}: {e}"))
}

/// WebAssembly wrapper for the automaton.
#[wasm_bindgen]
pub struct WasmAutomaton {
    automaton: Automaton,
}

#[wasm_bindgen]
impl WasmAutomaton {
    /// Create new automaton from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing AutomatonConfig
    /// * `seed_json` - JSON string containing Seed
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed_json: &str) -> Result<WasmAutomaton, JsValue> {
        let config: AutomatonConfig =
            serde_json::from_str(config_json).map_err(|e| js_error("Invalid config JSON", e))?;

        let seed: Seed =
            serde_json::from_str(seed_json).map_err(|e| js_error("Invalid seed JSON", e))?;

        let automaton =
            Automaton::from_seed(config, &seed).map_err(|e| js_error("Invalid config", e))?;

        Ok(WasmAutomaton { automaton })
    }

    /// Advance one generation.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.automaton.tick();
    }

    /// Advance multiple generations.
    #[wasm_bindgen]
    pub fn run(&mut self, steps: u64) {
        self.automaton.run(steps);
    }

    /// Reset the grid with a new seed.
    #[wasm_bindgen]
    pub fn reset(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed =
            serde_json::from_str(seed_json).map_err(|e| js_error("Invalid seed JSON", e))?;
        self.automaton.reseed(&seed);
        Ok(())
    }

    /// Empty every cell.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.automaton.grid_mut().clear();
    }

    /// Paint one cell. `species` is 0 = empty, 1 = rock, 2 = paper, 3 = scissors.
    /// Border and out-of-range cells are ignored.
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, x: usize, y: usize, species: u8) -> Result<(), JsValue> {
        let species = parse_species(species)?;
        let level = self.automaton.config().rule.initial_level;
        let grid = self.automaton.grid_mut();
        if grid.is_interior(x, y) {
            grid.set(x, y, species, level);
        }
        Ok(())
    }

    /// Species index of a cell, or 0 outside the grid.
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, x: usize, y: usize) -> u8 {
        let grid = self.automaton.grid();
        if x < grid.width() && y < grid.height() {
            grid.get(x, y).species.index()
        } else {
            0
        }
    }

    /// Paint the interior part of a rectangle with one species.
    #[wasm_bindgen(js_name = paintRect)]
    pub fn paint_rect(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        species: u8,
    ) -> Result<(), JsValue> {
        let species = parse_species(species)?;
        let level = self.automaton.config().rule.initial_level;
        self.automaton
            .grid_mut()
            .fill_rect(x, y, width, height, species, level);
        Ok(())
    }

    /// Switch neighbor selection (`uniform`, `fixed-cycle`, `precomputed-cycle`).
    #[wasm_bindgen(js_name = setNeighborMode)]
    pub fn set_neighbor_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: NeighborMode = mode.parse().map_err(|e| js_error("Invalid mode", e))?;
        self.automaton.set_neighbor_mode(mode);
        Ok(())
    }

    /// Switch the predation rule (`classic`, `waves`).
    #[wasm_bindgen(js_name = setRuleVariant)]
    pub fn set_rule_variant(&mut self, variant: &str) -> Result<(), JsValue> {
        let variant: RuleVariant = variant.parse().map_err(|e| js_error("Invalid rule", e))?;
        self.update_rule(|rule| rule.variant = variant)
    }

    /// Set initial and edible levels together so they are validated as a pair.
    #[wasm_bindgen(js_name = setLevels)]
    pub fn set_levels(&mut self, initial_level: u32, edible_level: u32) -> Result<(), JsValue> {
        self.update_rule(|rule| {
            rule.initial_level = initial_level;
            rule.edible_level = edible_level;
        })
    }

    #[wasm_bindgen(js_name = setYoungBanquet)]
    pub fn set_young_banquet(&mut self, enabled: bool) -> Result<(), JsValue> {
        self.update_rule(|rule| rule.young_banquet = enabled)
    }

    /// Get current configuration as a JS object.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.automaton.config())
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Get population statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let snapshot = StatsSnapshot {
            generation: self.automaton.generation(),
            stats: GridStats::from_grid(self.automaton.grid()),
        };
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| js_error("Serialization error", e))
    }

    /// Render the grid as row-major RGBA bytes, ready for `ImageData`.
    #[wasm_bindgen(js_name = renderRgba)]
    pub fn render_rgba(&self) -> Vec<u8> {
        render::to_rgba(self.automaton.grid())
    }

    /// Replace the grid interior with species classified from RGBA pixels.
    #[wasm_bindgen(js_name = seedFromRgba)]
    pub fn seed_from_rgba(&mut self, pixels: &[u8]) -> Result<(), JsValue> {
        let level = self.automaton.config().rule.initial_level;
        render::seed_from_rgba(self.automaton.grid_mut(), pixels, level)
            .map_err(|e| js_error("Invalid pixels", e))
    }

    /// Get grid width.
    #[wasm_bindgen(js_name = getWidth)]
    pub fn get_width(&self) -> usize {
        self.automaton.grid().width()
    }

    /// Get grid height.
    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self) -> usize {
        self.automaton.grid().height()
    }

    /// Get number of completed generations.
    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.automaton.generation()
    }
}

impl WasmAutomaton {
    fn update_rule(&mut self, edit: impl FnOnce(&mut RuleConfig)) -> Result<(), JsValue> {
        let mut rule = self.automaton.config().rule.clone();
        edit(&mut rule);
        self.automaton
            .configure(rule)
            .map_err(|e| js_error("Invalid rule", e))
    }
}

fn parse_species(index: u8) -> Result<Species, JsValue> {
    Species::from_index(index).ok_or_else(|| js_error("Invalid species", index))
}

/// Serializable statistics with the generation counter.
#[derive(Serialize)]
struct StatsSnapshot {
    generation: u64,
    #[serde(flatten)]
    stats: GridStats,
}
