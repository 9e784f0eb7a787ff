//! Sandfall Engine - falling-sand cellular automaton
//!
//! Architecture:
//! - core/        - Grid geometry, neighbourhoods, the three tick buffers
//! - domain/      - Materials and the material table
//! - systems/     - Movement, density and census passes
//! - simulation/  - EngineCore (tick pipeline) and the wasm `World`
//! - scheduler/   - TickScheduler, per-tick frames, native worker loop

pub mod core;
pub mod domain;
pub mod error;
pub mod scheduler;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, `log` -> console, banner
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("logger already installed");
        }
    }

    web_sys::console::log_1(&format!("Sandfall engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::grid::Grid;
pub use domain::{Material, MaterialClass, MaterialDefinition, MaterialId, MaterialTable, VOID_ID};
pub use error::{EngineError, EngineResult};
pub use scheduler::{EngineCommand, EngineEvent, Frame, GridSnapshot, SchedulerState, TickScheduler};
#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::{FrameSlot, ProcessHandle};
pub use simulation::{EngineConfig, EngineCore, PerfStats, World};
pub use systems::census::ParticleCount;

/// Id of the void material, for JS
#[wasm_bindgen]
pub fn void_id() -> u16 { VOID_ID }
