//! DensityPass - heavy particles sink through lighter settled ones
//!
//! Reads only the movement output (`input`) and writes swaps into `output`,
//! which starts as a copy of `input`. Each cell takes part in at most one
//! swap per pass, so the pass is a product of disjoint transpositions and
//! every material count is preserved exactly.

use rand::{Rng, RngCore};

use crate::core::grid::{Dir, Grid, Neighborhood};
use crate::domain::content::MaterialTable;
use crate::domain::materials::{MaterialId, VOID_ID};

pub struct DensityPass {
    claimed: Vec<bool>,
}

impl DensityPass {
    pub fn new(size: usize) -> Self {
        Self {
            claimed: vec![false; size],
        }
    }

    /// Returns the number of swaps performed
    pub fn run(
        &mut self,
        table: &MaterialTable,
        grid: &Grid,
        input: &[MaterialId],
        output: &mut [MaterialId],
        rng: &mut dyn RngCore,
    ) -> u32 {
        debug_assert_eq!(input.len(), grid.size(), "density: input length mismatch");
        debug_assert_eq!(output.len(), grid.size(), "density: output length mismatch");
        debug_assert_eq!(self.claimed.len(), grid.size(), "density: claim mask length mismatch");

        output.copy_from_slice(input);
        self.claimed.fill(false);

        let mut swaps = 0u32;
        for idx in 0..input.len() {
            let material = input[idx];
            if material == VOID_ID || self.claimed[idx] {
                continue;
            }

            let density = table.density(material);
            let neighbors = grid.neighbors(input, idx);

            if let Some(target) = self.pick_target(table, &neighbors, density, rng) {
                output[idx] = input[target];
                output[target] = material;
                self.claimed[idx] = true;
                self.claimed[target] = true;
                swaps += 1;
            }
        }
        swaps
    }

    /// Below first; then a random down-diagonal when self outweighs both
    /// down-diagonals and both sides; then a single down-diagonal when self
    /// outweighs it and the side next to it. An open side blocks its diagonal.
    fn pick_target(
        &self,
        table: &MaterialTable,
        neighbors: &Neighborhood,
        density: u32,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        let lighter = |dir: Dir| -> Option<usize> {
            let n = neighbors.get(dir)?;
            if n.material == VOID_ID || table.density(n.material) >= density {
                return None;
            }
            Some(n.index)
        };
        let available = |idx: usize| !self.claimed[idx];

        if let Some(below) = lighter(Dir::Down).filter(|&i| available(i)) {
            return Some(below);
        }

        let left = lighter(Dir::DownLeft).filter(|_| lighter(Dir::Left).is_some());
        let right = lighter(Dir::DownRight).filter(|_| lighter(Dir::Right).is_some());

        if let (Some(l), Some(r)) = (left, right) {
            let (first, second) = if rng.gen_bool(0.5) { (l, r) } else { (r, l) };
            if available(first) {
                return Some(first);
            }
            if available(second) {
                return Some(second);
            }
            return None;
        }

        left.or(right).filter(|&i| available(i))
    }
}
