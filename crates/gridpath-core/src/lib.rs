//! **gridpath-core** — the grid model searched by `gridpath-search`.
//!
//! This crate provides geometry primitives, the [`Cell`] and [`Grid`] types
//! with their layout invariants, and [`Layout`], a plain description that can
//! be parsed from a text map or (with the `serde` feature) from JSON.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use error::{LayoutError, ParseError, Role};
pub use geom::{Bounds, BoundsIter, Pos};
pub use grid::Grid;
pub use layout::Layout;
