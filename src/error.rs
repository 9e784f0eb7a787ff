use thiserror::Error;

/// Errors raised at the engine's setup boundaries.
///
/// The simulation itself never fails: unknown ids read as void, out of range
/// coordinates read as absent, out of range writes are dropped.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("material definitions: {0}")]
    MaterialDefinitions(#[source] serde_json::Error),

    #[error("engine config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("scheduler is not initialized")]
    NotInitialized,

    #[error("scheduler is already running")]
    AlreadyRunning,
}

pub type EngineResult<T> = Result<T, EngineError>;
