//! Grid - fixed-size rectangle of material ids
//!
//! index = y * width + x. Dimensions never change after construction; the
//! cell data itself lives in `GridBuffers`.

use crate::domain::materials::MaterialId;
use crate::error::{EngineError, EngineResult};

mod buffers;
mod neighbors;

pub use buffers::GridBuffers;
pub use neighbors::{Dir, Neighbor, Neighborhood};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        let size = (width as usize).checked_mul(height as usize);
        match size {
            Some(size) if width > 0 && height > 0 => Ok(Self { width, height, size }),
            _ => Err(EngineError::InvalidDimensions { width, height }),
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===

    /// Linear index of an in-range coordinate
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// (x, y) of a linear index: remainder for x, integer division for y
    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    #[inline]
    pub fn checked_index(&self, x: i64, y: i64) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.index(x as u32, y as u32))
        } else {
            None
        }
    }

    /// The 3x3 neighbourhood of `idx` read from `cells`
    pub fn neighbors(&self, cells: &[MaterialId], idx: usize) -> Neighborhood {
        debug_assert_eq!(cells.len(), self.size, "neighbors: buffer length mismatch");
        let (x, y) = self.coords(idx);
        Neighborhood::gather(self, cells, x as i64, y as i64)
    }
}
