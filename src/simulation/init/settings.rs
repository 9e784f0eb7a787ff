use rand::rngs::StdRng;
use rand::SeedableRng;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn reseed(engine: &mut EngineCore, seed: u64) {
    log::debug!("engine reseeded with {}", seed);
    engine.seed = seed;
    engine.rng = StdRng::seed_from_u64(seed);
}

pub(super) fn enable_perf_metrics(engine: &mut EngineCore, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(engine: &EngineCore) -> PerfStats {
    engine.perf_stats.clone()
}
