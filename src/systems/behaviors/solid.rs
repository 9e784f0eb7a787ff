//! SolidBehavior - falls straight or diagonally, never slides sideways

use super::{try_fall, Behavior, MoveContext, MoveOutcome};

pub struct SolidBehavior;

impl SolidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for SolidBehavior {
    fn update(&self, ctx: &mut MoveContext) -> MoveOutcome {
        match try_fall(ctx) {
            Some(dir) => MoveOutcome::Moved(dir),
            None => {
                ctx.stay();
                MoveOutcome::Stayed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Dir;
    use crate::domain::materials::VOID_ID;
    use crate::systems::behaviors::test_support::{parse, run_one};

    #[test]
    fn falls_straight_down_when_open() {
        let (grid, cells) = parse(&[
            "...",
            ".#.",
            "...",
        ]);
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 1, 1);
        assert_eq!(out, MoveOutcome::Moved(Dir::Down));
        assert_eq!(next[grid.index(1, 2)], 1);
        assert_eq!(next[grid.index(1, 1)], VOID_ID);
    }

    #[test]
    fn rolls_to_the_only_open_diagonal() {
        let (grid, cells) = parse(&[
            "...",
            "##.",
            "###",
        ]);
        // (0,1) can't roll left (wall) and right is blocked below
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 0, 1, 3);
        assert_eq!(out, MoveOutcome::Stayed);

        let (grid, cells) = parse(&[
            ".#.",
            ".#.",
            "##.",
        ]);
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 1, 3);
        assert_eq!(out, MoveOutcome::Moved(Dir::DownRight));
        assert_eq!(next[grid.index(2, 2)], 1);
    }

    #[test]
    fn diagonal_needs_lateral_side_open() {
        let (grid, cells) = parse(&[
            "...",
            ".##",
            ".#.",
        ]);
        // down-right is void but the right side is occupied
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 1, 9);
        assert_eq!(out, MoveOutcome::Moved(Dir::DownLeft));
    }

    #[test]
    fn never_slides_sideways() {
        let (grid, cells) = parse(&[
            "...",
            ".#.",
            "###",
        ]);
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 1, 5);
        assert_eq!(out, MoveOutcome::Stayed);
        assert_eq!(next[grid.index(1, 1)], 1);
    }

    #[test]
    fn claimed_target_is_skipped() {
        let (grid, cells) = parse(&[
            ".#.",
            "...",
            "...",
        ]);
        let mut next = vec![VOID_ID; grid.size()];
        next[grid.index(1, 1)] = 2;
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 0, 2);
        // straight down is taken, the open fan sends it diagonally instead
        assert!(matches!(out, MoveOutcome::Moved(Dir::DownLeft) | MoveOutcome::Moved(Dir::DownRight)));
        assert_eq!(next[grid.index(1, 1)], 2);
    }

    #[test]
    fn bottom_row_is_a_wall() {
        let (grid, cells) = parse(&[
            "...",
            ".#.",
        ]);
        let mut next = vec![VOID_ID; grid.size()];
        let out = run_one(&SolidBehavior, &grid, &cells, &mut next, 1, 1, 4);
        assert_eq!(out, MoveOutcome::Stayed);
    }
}
