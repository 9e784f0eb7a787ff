//! LiquidBehavior - falls like a solid, then slides sideways
//!
//! Lateral moves only happen when the particle could not fall. A slide
//! needs the cell above the destination to be open too, so a liquid never
//! tucks itself under an overhang in one step.

use super::{try_fall, Behavior, MoveContext, MoveOutcome};
use crate::core::grid::Dir;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Random side when both sides and both upper corners are
    /// open, otherwise whichever side has its upper corner open.
    fn try_slide(&self, ctx: &mut MoveContext) -> Option<Dir> {
        if ctx.is_free(Dir::Left)
            && ctx.is_free(Dir::Right)
            && ctx.is_free(Dir::UpLeft)
            && ctx.is_free(Dir::UpRight)
        {
            let dir = ctx.pick(Dir::Left, Dir::Right);
            if ctx.try_claim(dir) {
                return Some(dir);
            }
        }

        if ctx.is_free(Dir::UpLeft) && ctx.try_claim(Dir::Left) {
            return Some(Dir::Left);
        }

        if ctx.is_free(Dir::UpRight) && ctx.try_claim(Dir::Right) {
            return Some(Dir::Right);
        }

        None
    }
}

impl Default for LiquidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut MoveContext) -> MoveOutcome {
        if let Some(dir) = try_fall(ctx).or_else(|| self.try_slide(ctx)) {
            return MoveOutcome::Moved(dir);
        }
        ctx.stay();
        MoveOutcome::Stayed
    }
}
