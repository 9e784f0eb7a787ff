use crate::domain::materials::{MaterialId, VOID_ID};
use crate::scheduler::EngineCommand;
use crate::systems::census::ParticleCount;

use super::EngineCore;

/// Undefined and void-class ids are stored as plain void
pub(super) fn set_cell(engine: &mut EngineCore, x: i32, y: i32, material: MaterialId) -> bool {
    let Some(idx) = engine.grid.checked_index(x as i64, y as i64) else {
        return false;
    };
    let material = if engine.table.class(material).is_void() {
        VOID_ID
    } else {
        material
    };
    engine.buffers.current_mut()[idx] = material;
    true
}

pub(super) fn get_cell(engine: &EngineCore, x: i32, y: i32) -> Option<MaterialId> {
    let idx = engine.grid.checked_index(x as i64, y as i64)?;
    Some(engine.buffers.current()[idx])
}

pub(super) fn clear(engine: &mut EngineCore) {
    engine.buffers.clear();
    engine.census = ParticleCount::empty(&engine.table);
    engine.tick = 0;
}

pub(super) fn apply(engine: &mut EngineCore, command: EngineCommand) {
    match command {
        EngineCommand::SetCell { x, y, material } => {
            set_cell(engine, x, y, material);
        }
        EngineCommand::Clear => clear(engine),
    }
}

pub(super) fn random_variant(engine: &mut EngineCore, name: &str) -> Option<MaterialId> {
    engine.table.random_variant(name, &mut engine.rng)
}
