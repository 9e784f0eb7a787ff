//! MovementPass - relocate every particle of `current` into `next`
//!
//! Targets are claimed first-writer-wins against `next`, so the visiting
//! order picks the winner of a contested cell. Rows go top to bottom and
//! alternate direction (even rows left-to-right, odd rows right-to-left)
//! so neither side is systematically favoured.

use rand::RngCore;

use crate::core::grid::Grid;
use crate::domain::content::MaterialTable;
use crate::domain::materials::{MaterialId, VOID_ID};
use crate::systems::behaviors::{BehaviorRegistry, MoveContext, MoveOutcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementStats {
    pub processed: u32,
    pub moved: u32,
}

/// Boustrophedon visiting order over all cells
pub fn scan_order(grid: &Grid) -> impl Iterator<Item = usize> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    (0..height).flat_map(move |y| {
        let row = y * width;
        let xs: Box<dyn Iterator<Item = usize>> = if y % 2 == 0 {
            Box::new(0..width)
        } else {
            Box::new((0..width).rev())
        };
        xs.map(move |x| row + x)
    })
}

pub struct MovementPass {
    behaviors: BehaviorRegistry,
}

impl MovementPass {
    pub fn new() -> Self {
        Self {
            behaviors: BehaviorRegistry::new(),
        }
    }

    /// `next` must be all-void on entry; void cells are never copied forward.
    pub fn run(
        &self,
        table: &MaterialTable,
        grid: &Grid,
        current: &[MaterialId],
        next: &mut [MaterialId],
        rng: &mut dyn RngCore,
    ) -> MovementStats {
        debug_assert_eq!(current.len(), grid.size(), "movement: current length mismatch");
        debug_assert_eq!(next.len(), grid.size(), "movement: next length mismatch");

        let mut stats = MovementStats::default();

        for idx in scan_order(grid) {
            let material = current[idx];
            if material == VOID_ID {
                continue;
            }

            let mut ctx = MoveContext {
                next: &mut *next,
                idx,
                material,
                neighbors: grid.neighbors(current, idx),
                rng: &mut *rng,
            };

            stats.processed += 1;
            if let MoveOutcome::Moved(_) = self.behaviors.update(table.class(material), &mut ctx) {
                stats.moved += 1;
            }
        }

        stats
    }
}

impl Default for MovementPass {
    fn default() -> Self {
        Self::new()
    }
}
