use crate::domain::materials::{MaterialId, VOID_ID};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The three per-tick buffer roles.
///
/// - `current`: authoritative, read-only while a tick runs
/// - `next`: movement output, all-void when the tick starts
/// - `scratch`: density output, becomes `current` on rotation
///
/// All three are allocated once; only contents change afterwards.
pub struct GridBuffers {
    current: Vec<MaterialId>,
    next: Vec<MaterialId>,
    scratch: Vec<MaterialId>,
}

impl GridBuffers {
    pub fn new(size: usize) -> Self {
        Self {
            current: vec![VOID_ID; size],
            next: vec![VOID_ID; size],
            scratch: vec![VOID_ID; size],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[inline]
    pub fn current(&self) -> &[MaterialId] {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut [MaterialId] {
        &mut self.current
    }

    #[inline]
    pub fn next(&self) -> &[MaterialId] {
        &self.next
    }

    /// Reset `next` to all-void before the movement pass
    pub fn clear_next(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.next.par_iter_mut().for_each(|v| *v = VOID_ID);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.next.fill(VOID_ID);
        }
    }

    /// (current, next) for the movement pass
    #[inline]
    pub fn movement_io(&mut self) -> (&[MaterialId], &mut [MaterialId]) {
        (&self.current, &mut self.next)
    }

    /// (next, scratch) for the density pass
    #[inline]
    pub fn density_io(&mut self) -> (&[MaterialId], &mut [MaterialId]) {
        (&self.next, &mut self.scratch)
    }

    /// scratch -> current, current -> next, next -> scratch
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
        std::mem::swap(&mut self.next, &mut self.scratch);
    }

    pub fn clear(&mut self) {
        self.current.fill(VOID_ID);
        self.next.fill(VOID_ID);
        self.scratch.fill(VOID_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_moves_scratch_to_current() {
        let mut b = GridBuffers::new(2);
        b.current_mut().copy_from_slice(&[1, 1]);
        {
            let (_, next) = b.movement_io();
            next.copy_from_slice(&[2, 2]);
        }
        {
            let (_, scratch) = b.density_io();
            scratch.copy_from_slice(&[3, 3]);
        }
        let ptrs = (b.current.as_ptr(), b.next.as_ptr(), b.scratch.as_ptr());

        b.rotate();

        assert_eq!(b.current(), &[3, 3]);
        assert_eq!(b.next(), &[1, 1]);
        assert_eq!(b.scratch, vec![2, 2]);
        // no reallocation, just role changes
        assert_eq!(b.current.as_ptr(), ptrs.2);
        assert_eq!(b.next.as_ptr(), ptrs.0);
        assert_eq!(b.scratch.as_ptr(), ptrs.1);
    }

    #[test]
    fn clear_next_voids_everything() {
        let mut b = GridBuffers::new(3);
        {
            let (_, next) = b.movement_io();
            next.copy_from_slice(&[4, 5, 6]);
        }
        b.clear_next();
        assert!(b.next().iter().all(|&v| v == VOID_ID));
    }
}
