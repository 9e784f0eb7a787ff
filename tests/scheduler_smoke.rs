#![cfg(not(target_arch = "wasm32"))]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sandfall_engine::{
    EngineCommand, EngineConfig, EngineError, EngineEvent, SchedulerState, TickScheduler,
};

fn wait_for_tick(handle: &sandfall_engine::ProcessHandle, tick: u64) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if handle.latest_frame().map_or(false, |f| f.tick >= tick) {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn uninitialized_scheduler_cannot_process() {
    let err = TickScheduler::new().process(|_| {}).err().unwrap();
    assert!(matches!(err, EngineError::NotInitialized));
}

#[test]
fn process_ticks_and_applies_commands_between_ticks() {
    let config = EngineConfig {
        tick_interval_ms: 1,
        ..EngineConfig::new(16, 16)
    };
    let scheduler = TickScheduler::from_config(&config).unwrap();

    let censuses = Arc::new(AtomicU64::new(0));
    let snapshots = Arc::new(AtomicU64::new(0));
    let (sink_censuses, sink_snapshots) = (Arc::clone(&censuses), Arc::clone(&snapshots));
    let handle = scheduler
        .process(move |event| match event {
            EngineEvent::Census(count) => {
                assert!(count.total() <= 2);
                sink_censuses.fetch_add(1, Ordering::Relaxed);
            }
            EngineEvent::Snapshot(snapshot) => {
                assert_eq!(snapshot.width(), 16);
                sink_snapshots.fetch_add(1, Ordering::Relaxed);
            }
        })
        .unwrap();

    assert!(handle.set_cell(8, 0, 100));
    assert!(handle.send(EngineCommand::SetCell { x: 3, y: 0, material: 110 }));
    assert!(handle.set_cell(-5, 0, 100));
    assert!(wait_for_tick(&handle, 40));

    let frame = handle.latest_frame().unwrap();
    assert_eq!(frame.census.get("sand"), Some(1));
    assert_eq!(frame.census.get("water"), Some(1));
    assert_eq!(frame.census.total(), frame.snapshot.count_non_void() as u64);
    // 40 ticks is plenty for the grain to land on the floor
    assert_eq!(frame.snapshot.get(8, 15), Some(100));

    let scheduler = handle.stop().unwrap();
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    let ticks = scheduler.engine().unwrap().tick_count();
    assert!(ticks >= 40);
    assert_eq!(censuses.load(Ordering::Relaxed), ticks);
    assert_eq!(snapshots.load(Ordering::Relaxed), ticks);
}

#[test]
fn dropping_the_handle_stops_the_worker() {
    let scheduler = TickScheduler::from_config(&EngineConfig {
        tick_interval_ms: 1,
        ..EngineConfig::new(8, 8)
    })
    .unwrap();

    let seen = Arc::new(AtomicU64::new(0));
    let sink_seen = Arc::clone(&seen);
    let handle = scheduler
        .process(move |_| {
            sink_seen.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
    let frames = handle.frames();
    assert!(wait_for_tick(&handle, 3));
    drop(handle);

    let after_stop = seen.load(Ordering::Relaxed);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(seen.load(Ordering::Relaxed), after_stop);
    assert!(frames.latest().is_some());
}
