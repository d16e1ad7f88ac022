pub mod wall_grid;

use bitflags::bitflags;

/// (row, column)
pub type Position = (usize, usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// Fixed probing order, random choices over a neighborhood depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn wall(self) -> Walls {
        match self {
            Direction::Top => Walls::TOP,
            Direction::Right => Walls::RIGHT,
            Direction::Bottom => Walls::BOTTOM,
            Direction::Left => Walls::LEFT,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Top,
            1 => Direction::Right,
            2 => Direction::Bottom,
            3 => Direction::Left,
            _ => unreachable!(),
        }
    }
}

bitflags! {
    /// Walls still standing around a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const TOP    = 1;
        const RIGHT  = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT   = 1 << 3;
    }
}

/// Up to four directions, kept in probing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    dirs: [Direction; 4],
    len: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            dirs: [Direction::Top; 4],
            len: 0,
        }
    }

    pub fn push(&mut self, dir: Direction) {
        debug_assert!(!self.contains(dir), "direction pushed twice");
        self.dirs[self.len] = dir;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.as_slice().contains(&dir)
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.dirs[..self.len]
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Neighborhood {
    type Item = Direction;
    type IntoIter = std::iter::Take<std::array::IntoIter<Direction, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.into_iter().take(self.len)
    }
}
