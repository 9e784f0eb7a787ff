//! EngineCore - owns the grid buffers and runs ticks
//!
//! One tick: clear `next` -> MovementPass (current -> next) -> census of
//! `next` -> DensityPass (next -> scratch) -> rotate. The passes live in
//! `systems`; this module only sequences them and keeps the state they
//! share (material table, buffers, rng, tick counter, perf).

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::core::grid::{Grid, GridBuffers};
use crate::domain::content::MaterialTable;
use crate::domain::materials::{MaterialDefinition, MaterialId};
use crate::error::EngineResult;
use crate::scheduler::{EngineCommand, Frame, GridSnapshot};
use crate::systems::census::ParticleCount;
use crate::systems::density::DensityPass;
use crate::systems::movement::MovementPass;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use config::{EngineConfig, DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS};
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation engine
pub struct EngineCore {
    table: Arc<MaterialTable>,
    grid: Grid,
    buffers: GridBuffers,
    movement: MovementPass,
    density: DensityPass,

    // State
    rng: StdRng,
    seed: u64,
    census: ParticleCount,
    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an all-void engine over `table`
    pub fn new(width: u32, height: u32, table: MaterialTable) -> EngineResult<Self> {
        init::create_engine_core(width, height, Arc::new(table), DEFAULT_SEED)
    }

    /// `initialize(width, height, materialDefinitions)`; a missing void entry is synthesized
    pub fn initialize(
        width: u32,
        height: u32,
        definitions: Vec<MaterialDefinition>,
    ) -> EngineResult<Self> {
        Self::new(width, height, MaterialTable::build(definitions))
    }

    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        init::create_from_config(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn material_table(&self) -> &MaterialTable { &self.table }

    /// Ticks run since creation or the last `clear`
    pub fn tick_count(&self) -> u64 { self.tick }

    pub fn seed(&self) -> u64 { self.seed }

    /// The authoritative buffer
    pub fn cells(&self) -> &[MaterialId] {
        self.buffers.current()
    }

    /// Census of the last tick (all zero before the first one)
    pub fn census(&self) -> &ParticleCount {
        &self.census
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.grid.width(), self.grid.height(), self.buffers.current())
    }

    /// Census and snapshot of the last tick
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.tick,
            census: self.census.clone(),
            snapshot: self.snapshot(),
        }
    }

    /// Run one tick
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Write straight into the authoritative buffer. Out of range is a no-op
    /// and returns false; undefined ids are written as void.
    pub fn set_cell(&mut self, x: i32, y: i32, material: MaterialId) -> bool {
        commands::set_cell(self, x, y, material)
    }

    /// `None` outside the grid
    pub fn get_cell(&self, x: i32, y: i32) -> Option<MaterialId> {
        commands::get_cell(self, x, y)
    }

    /// Fill with void and reset the tick counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn apply(&mut self, command: EngineCommand) {
        commands::apply(self, command)
    }

    /// One colour variant of `name`, drawn from the engine rng
    pub fn random_variant(&mut self, name: &str) -> Option<MaterialId> {
        commands::random_variant(self, name)
    }

    /// Restart the random stream
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
