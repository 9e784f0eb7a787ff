use std::sync::Arc;

use crate::domain::materials::{MaterialId, VOID_ID};
use crate::systems::census::ParticleCount;

/// Immutable post-tick copy of the authoritative buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    width: u32,
    height: u32,
    cells: Arc<[MaterialId]>,
}

impl GridSnapshot {
    pub(crate) fn new(width: u32, height: u32, cells: &[MaterialId]) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells: Arc::from(cells),
        }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn cells(&self) -> &[MaterialId] {
        &self.cells
    }

    /// `None` outside the grid
    pub fn get(&self, x: i64, y: i64) -> Option<MaterialId> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn count_non_void(&self) -> usize {
        self.cells.iter().filter(|&&m| m != VOID_ID).count()
    }
}

/// Everything emitted after one tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub tick: u64,
    pub census: ParticleCount,
    pub snapshot: GridSnapshot,
}

impl Frame {
    pub fn into_events(self) -> [super::EngineEvent; 2] {
        [
            super::EngineEvent::Census(self.census),
            super::EngineEvent::Snapshot(self.snapshot),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lookup_is_bounds_checked() {
        let snap = GridSnapshot::new(2, 2, &[0, 5, 0, 7]);
        assert_eq!(snap.get(1, 0), Some(5));
        assert_eq!(snap.get(1, 1), Some(7));
        assert_eq!(snap.get(2, 0), None);
        assert_eq!(snap.get(0, -1), None);
        assert_eq!(snap.count_non_void(), 2);
    }

    #[test]
    fn frame_splits_into_census_then_snapshot() {
        use crate::domain::content::MaterialTable;
        use crate::scheduler::EngineEvent;
        use crate::systems::census::census;

        let table = MaterialTable::default_palette();
        let cells = [0, 100, 110, 0];
        let frame = Frame {
            tick: 3,
            census: census(&table, &cells),
            snapshot: GridSnapshot::new(2, 2, &cells),
        };
        match frame.into_events() {
            [EngineEvent::Census(count), EngineEvent::Snapshot(snap)] => {
                assert_eq!(count.get("sand"), Some(1));
                assert_eq!(count.get("water"), Some(1));
                assert_eq!(snap.cells(), &cells);
            }
            other => panic!("unexpected events {:?}", other),
        }
    }
}
