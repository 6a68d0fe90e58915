//! The [`Cell`] type — the topology of one grid square.

use crate::geom::Pos;

/// One grid square: its position, obstacle flag and endpoint role.
///
/// Search scratch (distances, parents, visited flags) is not stored here; it
/// lives in the searcher so a grid can be searched repeatedly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pos: Pos,
    pub(crate) obstacle: bool,
    pub(crate) is_start: bool,
    pub(crate) is_end: bool,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(pos: Pos, obstacle: bool) -> Self {
        Self {
            pos,
            obstacle,
            is_start: false,
            is_end: false,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Whether the cell is impassable.
    #[inline]
    pub const fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_end(&self) -> bool {
        self.is_end
    }

    /// Whether the cell is the start or the end.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }
}
