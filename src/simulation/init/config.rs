use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::materials::MaterialDefinition;
use crate::domain::palette;
use crate::error::{EngineError, EngineResult};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_WIDTH: u32 = 160;
pub const DEFAULT_HEIGHT: u32 = 160;

/// Engine setup, usually read from JSON. Every key is optional.
///
/// ```json
/// { "width": 160, "height": 160, "tickIntervalMs": 10, "seed": 7, "materials": [...] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub tick_interval_ms: u64,
    pub seed: u64,
    pub materials: Vec<MaterialDefinition>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: DEFAULT_SEED,
            materials: palette::default_definitions(),
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(EngineError::Config)
    }

    /// Zero is clamped to 1ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}
