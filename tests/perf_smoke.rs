use sandfall_engine::{EngineCore, MaterialTable};

#[test]
fn perf_smoke_tick() {
    let mut engine = EngineCore::new(128, 64, MaterialTable::default_palette()).unwrap();
    engine.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            engine.set_cell(x, y, if (x + y) % 2 == 0 { 100 } else { 112 });
        }
    }
    engine.tick();
    let stats = engine.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.movement_ms() <= stats.step_ms());
    assert_eq!(stats.particles_processed(), 128 * 32);
    assert_eq!(stats.counted_particles(), 128 * 32);
}
