//! Census - per-tick particle count by material name
//!
//! Names are the table's census enumeration (fixed at build time), so a
//! count is a dense vector indexed by name slot rather than a string map.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::content::MaterialTable;
use crate::domain::materials::MaterialId;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
const CENSUS_CHUNK: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticleCount {
    names: Arc<[String]>,
    counts: Vec<u32>,
}

impl ParticleCount {
    /// All-zero count over the table's names
    pub fn empty(table: &MaterialTable) -> Self {
        let names = table.shared_census_names();
        let counts = vec![0; names.len()];
        Self { names, counts }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        let slot = self.names.iter().position(|n| n == name)?;
        Some(self.counts[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.counts.iter().copied())
    }

    /// Counts indexed by census slot
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for ParticleCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (name, count) in self.iter() {
            map.serialize_entry(name, &count)?;
        }
        map.end()
    }
}

/// Tally `cells` by census name. Void and undefined ids are not counted.
pub fn census(table: &MaterialTable, cells: &[MaterialId]) -> ParticleCount {
    let mut count = ParticleCount::empty(table);
    let slots = count.counts.len();
    if slots == 0 {
        return count;
    }

    #[cfg(feature = "parallel")]
    {
        count.counts = cells
            .par_chunks(CENSUS_CHUNK)
            .fold(
                || vec![0u32; slots],
                |mut acc, chunk| {
                    tally(table, chunk, &mut acc);
                    acc
                },
            )
            .reduce(
                || vec![0u32; slots],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        *x += y;
                    }
                    a
                },
            );
    }
    #[cfg(not(feature = "parallel"))]
    {
        tally(table, cells, &mut count.counts);
    }

    count
}

#[inline]
fn tally(table: &MaterialTable, cells: &[MaterialId], acc: &mut [u32]) {
    for &m in cells {
        if let Some(slot) = table.census_slot(m) {
            acc[slot] += 1;
        }
    }
}
