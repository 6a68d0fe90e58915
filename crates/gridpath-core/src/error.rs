//! Error types for grid construction and layout parsing.

use thiserror::Error;

use crate::geom::{Bounds, Pos};

/// Which endpoint a layout error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    End,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Start => f.write_str("start"),
            Role::End => f.write_str("end"),
        }
    }
}

/// A grid layout violates the start/end/obstacle invariants.
///
/// Raised at construction or while editing a grid, never during a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid dimensions must be positive, got {0}")]
    EmptyGrid(Bounds),

    #[error("grid dimensions {rows}x{cols} are too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("start and end coincide at {0}")]
    SameStartEnd(Pos),

    #[error("{role} {pos} is outside the {bounds} grid")]
    OutOfBounds { role: Role, pos: Pos, bounds: Bounds },

    #[error("{role} {pos} is an obstacle")]
    ObstacleAt { role: Role, pos: Pos },
}

/// A text map could not be turned into a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Pos },

    #[error("map has no {0} cell")]
    Missing(Role),

    #[error("map has more than one {role} cell (second at {pos})")]
    Duplicate { role: Role, pos: Pos },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
