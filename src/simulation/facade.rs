use wasm_bindgen::prelude::*;

use crate::domain::content::MaterialTable;
use crate::domain::materials::VOID_ID;
use crate::error::EngineError;

use super::config::EngineConfig;
use super::perf_stats::PerfStats;
use super::EngineCore;

fn js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle to one engine. The host drives `tick` from its own timer.
#[wasm_bindgen]
pub struct World {
    core: EngineCore,
}

#[wasm_bindgen]
impl World {
    /// Create an all-void world. Without `materials_json` the built-in palette is used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, materials_json: Option<String>) -> Result<World, JsValue> {
        let table = match materials_json {
            Some(json) => MaterialTable::from_definitions_json(&json).map_err(js_error)?,
            None => MaterialTable::default_palette(),
        };
        let core = EngineCore::new(width, height, table).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let config = EngineConfig::from_json(json).map_err(js_error)?;
        let core = EngineCore::from_config(&config).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.tick_count() }

    /// Run one tick
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Out of range coordinates are ignored (returns false)
    pub fn set_cell(&mut self, x: i32, y: i32, material: u16) -> bool {
        self.core.set_cell(x, y, material)
    }

    /// 0 (void) outside the grid
    pub fn get_cell(&self, x: i32, y: i32) -> u16 {
        self.core.get_cell(x, y).unwrap_or(VOID_ID)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    /// Pointer to the authoritative buffer (for a zero-copy JS view, valid until the next tick)
    pub fn cells_ptr(&self) -> *const u16 {
        self.core.cells().as_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells().len()
    }

    /// Copy of the authoritative buffer
    pub fn snapshot(&self) -> Vec<u16> {
        self.core.cells().to_vec()
    }

    /// Last tick census as `{name: count}` JSON
    pub fn census_json(&self) -> String {
        self.core.census().to_json()
    }

    /// All ids sharing `name` (colour variants)
    pub fn material_variants(&self, name: &str) -> Vec<u16> {
        self.core
            .material_table()
            .variants(name)
            .map(|ids| ids.to_vec())
            .unwrap_or_default()
    }

    pub fn random_variant(&mut self, name: &str) -> Option<u16> {
        self.core.random_variant(name)
    }

    pub fn material_manifest_json(&self) -> String {
        self.core.material_table().manifest_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
