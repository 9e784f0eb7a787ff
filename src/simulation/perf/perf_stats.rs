use wasm_bindgen::prelude::*;

/// Timings and counters of the last tick (all zero while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) movement_ms: f64,
    pub(super) census_ms: f64,
    pub(super) density_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) density_swaps: u32,
    pub(super) counted_particles: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn movement_ms(&self) -> f64 { self.movement_ms }
    #[wasm_bindgen(getter)]
    pub fn census_ms(&self) -> f64 { self.census_ms }
    #[wasm_bindgen(getter)]
    pub fn density_ms(&self) -> f64 { self.density_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn density_swaps(&self) -> u32 { self.density_swaps }
    #[wasm_bindgen(getter)]
    pub fn counted_particles(&self) -> u32 { self.counted_particles }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
