use super::Grid;
use crate::domain::materials::{MaterialId, VOID_ID};

/// Moore neighbourhood slots, numbered like a phone keypad turned upside
/// down (y grows downwards):
///
/// ```text
/// 7 8 9   (y-1)
/// 4 5 6   (y)
/// 1 2 3   (y+1)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir {
    DownLeft = 1,
    Down = 2,
    DownRight = 3,
    Left = 4,
    Center = 5,
    Right = 6,
    UpLeft = 7,
    Up = 8,
    UpRight = 9,
}

impl Dir {
    pub const ALL: [Dir; 9] = [
        Dir::DownLeft,
        Dir::Down,
        Dir::DownRight,
        Dir::Left,
        Dir::Center,
        Dir::Right,
        Dir::UpLeft,
        Dir::Up,
        Dir::UpRight,
    ];

    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Dir::DownLeft => (-1, 1),
            Dir::Down => (0, 1),
            Dir::DownRight => (1, 1),
            Dir::Left => (-1, 0),
            Dir::Center => (0, 0),
            Dir::Right => (1, 0),
            Dir::UpLeft => (-1, -1),
            Dir::Up => (0, -1),
            Dir::UpRight => (1, -1),
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize - 1
    }
}

/// An existing neighbour: where it is and what it holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub material: MaterialId,
}

/// 9-slot view around one cell. Slots outside the grid are `None`, never void.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    slots: [Option<Neighbor>; 9],
}

impl Neighborhood {
    pub(super) fn gather(grid: &Grid, cells: &[MaterialId], x: i64, y: i64) -> Self {
        let mut slots = [None; 9];
        for dir in Dir::ALL {
            let (dx, dy) = dir.offset();
            if let Some(index) = grid.checked_index(x + dx, y + dy) {
                slots[dir.slot()] = Some(Neighbor {
                    index,
                    material: cells[index],
                });
            }
        }
        Self { slots }
    }

    #[inline]
    pub fn get(&self, dir: Dir) -> Option<Neighbor> {
        self.slots[dir.slot()]
    }

    #[inline]
    pub fn index(&self, dir: Dir) -> Option<usize> {
        self.get(dir).map(|n| n.index)
    }

    #[inline]
    pub fn material(&self, dir: Dir) -> Option<MaterialId> {
        self.get(dir).map(|n| n.material)
    }

    /// Present and holding the void id. Absent slots are walls.
    #[inline]
    pub fn is_void(&self, dir: Dir) -> bool {
        self.material(dir) == Some(VOID_ID)
    }

    /// Present and holding anything but void
    #[inline]
    pub fn is_occupied(&self, dir: Dir) -> bool {
        matches!(self.material(dir), Some(m) if m != VOID_ID)
    }
}
