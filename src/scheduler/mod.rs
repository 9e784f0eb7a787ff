//! TickScheduler - initialization state and the fixed-period tick loop
//!
//! `Uninitialized -> Idle` on `initialize`, then `Idle -> Ticking -> Idle`
//! once per tick. Ticks never overlap. `run_once` is the synchronous unit
//! a host timer (or the wasm facade) drives; on native targets `process`
//! moves the scheduler onto its own worker thread.

use std::time::Duration;

use crate::domain::materials::{MaterialDefinition, MaterialId};
use crate::error::{EngineError, EngineResult};
use crate::simulation::{EngineConfig, EngineCore, DEFAULT_TICK_INTERVAL_MS};

mod events;
mod frame;
#[cfg(not(target_arch = "wasm32"))]
mod driver;

pub use events::{EngineCommand, EngineEvent};
pub use frame::{Frame, GridSnapshot};
#[cfg(not(target_arch = "wasm32"))]
pub use driver::{FrameSlot, ProcessHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Uninitialized,
    Idle,
    Ticking,
}

pub struct TickScheduler {
    state: SchedulerState,
    period: Duration,
    engine: Option<EngineCore>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Uninitialized,
            period: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            engine: None,
        }
    }

    /// Initialized scheduler with the config's engine and period
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let mut scheduler = Self::new();
        scheduler.initialize_with_config(config)?;
        Ok(scheduler)
    }

    /// Build the engine. Calling it again replaces the engine and its grid.
    pub fn initialize(
        &mut self,
        width: u32,
        height: u32,
        definitions: Vec<MaterialDefinition>,
    ) -> EngineResult<()> {
        let engine = EngineCore::initialize(width, height, definitions)?;
        self.install(engine);
        Ok(())
    }

    pub fn initialize_with_config(&mut self, config: &EngineConfig) -> EngineResult<()> {
        let engine = EngineCore::from_config(config)?;
        self.period = config.tick_interval();
        self.install(engine);
        Ok(())
    }

    fn install(&mut self, engine: EngineCore) {
        if self.engine.is_some() {
            log::warn!("scheduler re-initialized, previous grid dropped");
        }
        log::info!("scheduler ready: {}x{}", engine.width(), engine.height());
        self.engine = Some(engine);
        self.state = SchedulerState::Idle;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn engine(&self) -> Option<&EngineCore> {
        self.engine.as_ref()
    }

    /// Direct write into the authoritative buffer; false when uninitialized or out of range
    pub fn set_cell(&mut self, x: i32, y: i32, material: MaterialId) -> bool {
        match self.engine.as_mut() {
            Some(engine) => engine.set_cell(x, y, material),
            None => false,
        }
    }

    pub fn apply(&mut self, command: EngineCommand) -> EngineResult<()> {
        let engine = self.engine.as_mut().ok_or(EngineError::NotInitialized)?;
        engine.apply(command);
        Ok(())
    }

    /// Run exactly one tick and return its outputs
    pub fn run_once(&mut self) -> EngineResult<Frame> {
        let engine = self.engine.as_mut().ok_or(EngineError::NotInitialized)?;
        if self.state == SchedulerState::Ticking {
            return Err(EngineError::AlreadyRunning);
        }

        self.state = SchedulerState::Ticking;
        engine.tick();
        self.state = SchedulerState::Idle;

        Ok(engine.frame())
    }

    /// Start the fixed-period loop on a worker thread. `sink` receives the
    /// census then the snapshot of every tick.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn process<F>(self, sink: F) -> EngineResult<ProcessHandle>
    where
        F: FnMut(EngineEvent) + Send + 'static,
    {
        driver::spawn(self, sink)
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
