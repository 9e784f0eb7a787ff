//! Behaviors - per-class movement rules
//!
//! Each occupied cell of `current` gets one `update` call per tick. A
//! behaviour relocates the particle by claiming a slot in `next`, or keeps
//! it in place. Claims are first-writer-wins, so the scan order decides
//! contested targets (see `systems::movement`).

mod solid;
mod liquid;

pub use solid::SolidBehavior;
pub use liquid::LiquidBehavior;

use rand::{Rng, RngCore};

use crate::core::grid::{Dir, Neighborhood};
use crate::domain::materials::{MaterialClass, MaterialId, VOID_ID};

/// Update context passed to behaviors
pub struct MoveContext<'a> {
    pub next: &'a mut [MaterialId],
    pub idx: usize,
    pub material: MaterialId,
    /// Neighbourhood of `idx` as read from `current`
    pub neighbors: Neighborhood,
    pub rng: &'a mut dyn RngCore,
}

impl<'a> MoveContext<'a> {
    /// Void in `current` (absent slots never are)
    #[inline]
    pub fn is_free(&self, dir: Dir) -> bool {
        self.neighbors.is_void(dir)
    }

    /// Move into `dir` if it is void in `current` and still unclaimed in `next`
    #[inline]
    pub fn try_claim(&mut self, dir: Dir) -> bool {
        if !self.neighbors.is_void(dir) {
            return false;
        }
        let Some(target) = self.neighbors.index(dir) else {
            return false;
        };
        if self.next[target] != VOID_ID {
            return false;
        }
        self.next[target] = self.material;
        true
    }

    /// Keep the particle where it is
    #[inline]
    pub fn stay(&mut self) {
        self.next[self.idx] = self.material;
    }

    /// Fair coin between two directions
    #[inline]
    pub fn pick(&mut self, a: Dir, b: Dir) -> Dir {
        if self.rng.gen_bool(0.5) { a } else { b }
    }
}

/// What a behaviour did with its particle this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Dir),
    Stayed,
}

/// Behavior trait - each class implements this
pub trait Behavior {
    fn update(&self, ctx: &mut MoveContext) -> MoveOutcome;
}

/// Falling attempts shared by every moving class:
/// straight down, a random down-diagonal when the whole lower fan is open,
/// then each down-diagonal whose lateral side is open.
pub(crate) fn try_fall(ctx: &mut MoveContext) -> Option<Dir> {
    if ctx.try_claim(Dir::Down) {
        return Some(Dir::Down);
    }

    if ctx.is_free(Dir::DownLeft)
        && ctx.is_free(Dir::DownRight)
        && ctx.is_free(Dir::Left)
        && ctx.is_free(Dir::Right)
    {
        let dir = ctx.pick(Dir::DownLeft, Dir::DownRight);
        if ctx.try_claim(dir) {
            return Some(dir);
        }
    }

    if ctx.is_free(Dir::Left) && ctx.try_claim(Dir::DownLeft) {
        return Some(Dir::DownLeft);
    }

    if ctx.is_free(Dir::Right) && ctx.try_claim(Dir::DownRight) {
        return Some(Dir::DownRight);
    }

    None
}

/// Behavior registry - dispatch by class
pub struct BehaviorRegistry {
    solid: SolidBehavior,
    liquid: LiquidBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            solid: SolidBehavior::new(),
            liquid: LiquidBehavior::new(),
        }
    }

    /// Dispatch update to the class behaviour.
    /// Void-class ids other than 0 (and undefined ids) are inert: they stay put.
    pub fn update(&self, class: MaterialClass, ctx: &mut MoveContext) -> MoveOutcome {
        match class {
            MaterialClass::Solid => self.solid.update(ctx),
            MaterialClass::Liquid => self.liquid.update(ctx),
            MaterialClass::Void => {
                ctx.stay();
                MoveOutcome::Stayed
            }
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::grid::Grid;

    /// Run one behaviour on the cell at (x, y) of `current`, returning the outcome and `next`
    pub fn run_one<B: Behavior>(
        behavior: &B,
        grid: &Grid,
        current: &[MaterialId],
        next: &mut [MaterialId],
        x: u32,
        y: u32,
        seed: u64,
    ) -> MoveOutcome {
        let idx = grid.index(x, y);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = MoveContext {
            next,
            idx,
            material: current[idx],
            neighbors: grid.neighbors(current, idx),
            rng: &mut rng,
        };
        behavior.update(&mut ctx)
    }

    /// Parse a picture of the grid: `.` void, `#` id 1, `~` id 2
    pub fn parse(rows: &[&str]) -> (Grid, Vec<MaterialId>) {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let grid = Grid::new(width, height).unwrap();
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| match c {
                '#' => 1,
                '~' => 2,
                _ => VOID_ID,
            })
            .collect();
        (grid, cells)
    }
}
