use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::grid::{Grid, GridBuffers};
use crate::domain::content::MaterialTable;
use crate::error::EngineResult;
use crate::systems::census::ParticleCount;
use crate::systems::density::DensityPass;
use crate::systems::movement::MovementPass;

use super::config::EngineConfig;
use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn create_engine_core(
    width: u32,
    height: u32,
    table: Arc<MaterialTable>,
    seed: u64,
) -> EngineResult<EngineCore> {
    let grid = Grid::new(width, height)?;
    log::info!(
        "engine init: {}x{} grid, {} material ids, census names {:?}",
        width,
        height,
        table.len(),
        table.census_names()
    );

    Ok(EngineCore {
        census: ParticleCount::empty(&table),
        table,
        grid,
        buffers: GridBuffers::new(grid.size()),
        movement: MovementPass::new(),
        density: DensityPass::new(grid.size()),
        rng: StdRng::seed_from_u64(seed),
        seed,
        tick: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn create_from_config(config: &EngineConfig) -> EngineResult<EngineCore> {
    let table = MaterialTable::build(config.materials.iter().cloned());
    create_engine_core(config.width, config.height, Arc::new(table), config.seed)
}
