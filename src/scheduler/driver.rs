//! Native tick loop: one worker thread, a crossbeam ticker, and commands
//! applied between ticks (never during one).

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender};
use parking_lot::Mutex;

use super::{EngineCommand, EngineEvent, Frame, SchedulerState, TickScheduler};
use crate::domain::materials::MaterialId;
use crate::error::{EngineError, EngineResult};

/// Latest published frame. Overwritten each tick; slow readers skip frames.
#[derive(Default)]
pub struct FrameSlot {
    latest: Mutex<Option<Frame>>,
}

impl FrameSlot {
    pub fn publish(&self, frame: Frame) {
        *self.latest.lock() = Some(frame);
    }

    pub fn latest(&self) -> Option<Frame> {
        self.latest.lock().clone()
    }
}

/// Control side of a running scheduler. Dropping it stops the worker.
pub struct ProcessHandle {
    commands: Sender<EngineCommand>,
    stop: Sender<()>,
    frames: Arc<FrameSlot>,
    worker: Option<JoinHandle<TickScheduler>>,
}

impl ProcessHandle {
    /// Queue a command for the next gap between ticks; false once the worker is gone
    pub fn send(&self, command: EngineCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn set_cell(&self, x: i32, y: i32, material: MaterialId) -> bool {
        self.send(EngineCommand::SetCell { x, y, material })
    }

    pub fn latest_frame(&self) -> Option<Frame> {
        self.frames.latest()
    }

    pub fn frames(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.frames)
    }

    /// Stop the loop and hand the scheduler back (`None` if the worker panicked)
    pub fn stop(mut self) -> Option<TickScheduler> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<TickScheduler> {
        let worker = self.worker.take()?;
        let _ = self.stop.send(());
        match worker.join() {
            Ok(scheduler) => Some(scheduler),
            Err(_) => {
                log::error!("tick worker panicked");
                None
            }
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub(super) fn spawn<F>(scheduler: TickScheduler, sink: F) -> EngineResult<ProcessHandle>
where
    F: FnMut(EngineEvent) + Send + 'static,
{
    match scheduler.state() {
        SchedulerState::Uninitialized => return Err(EngineError::NotInitialized),
        SchedulerState::Ticking => return Err(EngineError::AlreadyRunning),
        SchedulerState::Idle => {}
    }

    let (command_tx, command_rx) = unbounded();
    let (stop_tx, stop_rx) = bounded(1);
    let frames = Arc::new(FrameSlot::default());

    let worker_frames = Arc::clone(&frames);
    let worker = std::thread::spawn(move || run(scheduler, command_rx, stop_rx, worker_frames, sink));

    Ok(ProcessHandle {
        commands: command_tx,
        stop: stop_tx,
        frames,
        worker: Some(worker),
    })
}

fn run<F>(
    mut scheduler: TickScheduler,
    commands: Receiver<EngineCommand>,
    stop: Receiver<()>,
    frames: Arc<FrameSlot>,
    mut sink: F,
) -> TickScheduler
where
    F: FnMut(EngineEvent),
{
    let ticker = crossbeam_channel::tick(scheduler.period());
    log::info!("tick loop started, period {:?}", scheduler.period());

    loop {
        select! {
            recv(stop) -> _ => break,
            recv(commands) -> msg => match msg {
                Ok(command) => {
                    if let Err(err) = scheduler.apply(command) {
                        log::warn!("command dropped: {}", err);
                    }
                }
                Err(_) => break,
            },
            recv(ticker) -> _ => match scheduler.run_once() {
                Ok(frame) => {
                    for event in frame.clone().into_events() {
                        sink(event);
                    }
                    frames.publish(frame);
                }
                Err(err) => {
                    log::error!("tick failed: {}", err);
                    break;
                }
            },
        }
    }

    // Commands queued before the stop still land
    for command in commands.try_iter() {
        let _ = scheduler.apply(command);
    }

    log::info!(
        "tick loop stopped after {} ticks",
        scheduler.engine().map_or(0, |e| e.tick_count())
    );
    scheduler
}
