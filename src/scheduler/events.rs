use serde::{Deserialize, Serialize};

use super::frame::GridSnapshot;
use crate::domain::materials::MaterialId;
use crate::systems::census::ParticleCount;

/// Commands a host can send to a running engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineCommand {
    /// Overwrite one cell; out of range coordinates are ignored
    SetCell { x: i32, y: i32, material: MaterialId },
    /// Fill the grid with void
    Clear,
}

/// Per-tick outputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Census(ParticleCount),
    Snapshot(GridSnapshot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_tagged_json() {
        let cmd: EngineCommand =
            serde_json::from_str(r#"{"type":"setCell","x":-1,"y":4,"material":110}"#).unwrap();
        assert_eq!(cmd, EngineCommand::SetCell { x: -1, y: 4, material: 110 });
        let cmd: EngineCommand = serde_json::from_str(r#"{"type":"clear"}"#).unwrap();
        assert_eq!(cmd, EngineCommand::Clear);
    }
}
