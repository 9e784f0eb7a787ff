use crate::systems::census::census;

use super::{EngineCore, PerfTimer};

pub(super) fn tick(engine: &mut EngineCore) {
    let mut timer = engine.perf_enabled.then(PerfTimer::start);

    // `next` must be all-void: the movement pass never copies void forward
    engine.buffers.clear_next();

    let (current, next) = engine.buffers.movement_io();
    let moved = engine
        .movement
        .run(&engine.table, &engine.grid, current, next, &mut engine.rng);
    let movement_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    engine.census = census(&engine.table, engine.buffers.next());
    let census_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    let (input, output) = engine.buffers.density_io();
    let swaps = engine
        .density
        .run(&engine.table, &engine.grid, input, output, &mut engine.rng);
    let density_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    engine.buffers.rotate();
    engine.tick += 1;

    log::trace!(
        "tick {}: {} processed, {} moved, {} density swaps",
        engine.tick,
        moved.processed,
        moved.moved,
        swaps
    );

    if let Some(t) = timer {
        let stats = &mut engine.perf_stats;
        stats.step_ms = t.total_ms();
        stats.movement_ms = movement_ms;
        stats.census_ms = census_ms;
        stats.density_ms = density_ms;
        stats.particles_processed = moved.processed;
        stats.particles_moved = moved.moved;
        stats.density_swaps = swaps;
        stats.counted_particles = engine.census.total().min(u32::MAX as u64) as u32;
        stats.grid_size = engine.grid.size() as u32;
    }
}
