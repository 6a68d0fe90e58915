//! The [`Grid`] type — a fixed-size rectangle of [`Cell`]s with one start and
//! one end.
//!
//! The grid owns its cells outright. Dimensions never change after
//! [`Grid::build`]; obstacles and endpoints may be edited between searches
//! through methods that keep the layout invariants intact:
//!
//! - exactly one start cell and one end cell, at different positions;
//! - neither endpoint is an obstacle.

use crate::cell::Cell;
use crate::error::{LayoutError, Result, Role};
use crate::geom::{Bounds, Pos};

/// A rectangular obstacle grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Pos,
    end: Pos,
}

impl Grid {
    /// Build a grid of `rows` x `cols` cells.
    ///
    /// `is_obstacle` is queried once per cell. Fails if the dimensions are
    /// rejected by [`Grid::check_dimensions`], if `start == end`, if either
    /// endpoint is out of bounds, or if either endpoint is reported as an
    /// obstacle.
    pub fn build(
        rows: usize,
        cols: usize,
        is_obstacle: impl Fn(Pos) -> bool,
        start: Pos,
        end: Pos,
    ) -> Result<Self> {
        let bounds = Self::check_dimensions(rows, cols)?;
        if start == end {
            return Err(LayoutError::SameStartEnd(start));
        }
        for (role, pos) in [(Role::Start, start), (Role::End, end)] {
            if !bounds.contains(pos) {
                return Err(LayoutError::OutOfBounds { role, pos, bounds });
            }
        }

        let mut cells: Vec<Cell> = bounds.iter().map(|p| Cell::new(p, is_obstacle(p))).collect();

        for (role, pos) in [(Role::Start, start), (Role::End, end)] {
            let Some(i) = bounds.index(pos) else {
                return Err(LayoutError::OutOfBounds { role, pos, bounds });
            };
            if cells[i].obstacle {
                return Err(LayoutError::ObstacleAt { role, pos });
            }
            match role {
                Role::Start => cells[i].is_start = true,
                Role::End => cells[i].is_end = true,
            }
        }

        Ok(Self {
            bounds,
            cells,
            start,
            end,
        })
    }

    /// Bounds for a `rows` x `cols` grid.
    ///
    /// Both dimensions must be positive, each must fit a [`Pos`] coordinate,
    /// and the cell count must fit a `usize`.
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<Bounds> {
        let bounds = Bounds::new(rows, cols);
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyGrid(bounds));
        }
        let max = i32::MAX as usize;
        if rows > max || cols > max || rows.checked_mul(cols).is_none() {
            return Err(LayoutError::TooLarge { rows, cols });
        }
        Ok(bounds)
    }

    /// Build a grid from a row-major obstacle mask of length `rows * cols`.
    ///
    /// Missing mask entries count as open cells.
    pub fn from_mask(rows: usize, cols: usize, mask: &[bool], start: Pos, end: Pos) -> Result<Self> {
        let bounds = Bounds::new(rows, cols);
        Self::build(
            rows,
            cols,
            |p| {
                bounds
                    .index(p)
                    .and_then(|i| mask.get(i).copied())
                    .unwrap_or(false)
            },
            start,
            end,
        )
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is an obstacle. Positions outside the grid count as
    /// obstacles.
    #[inline]
    pub fn is_obstacle(&self, p: Pos) -> bool {
        self.cell(p).is_none_or(|c| c.obstacle)
    }

    /// Whether `p` can be stepped on.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        !self.is_obstacle(p)
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.obstacle).count()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Flip the obstacle flag at `p`.
    ///
    /// Endpoints and out-of-bounds positions are left untouched; returns
    /// whether the cell changed.
    pub fn toggle_obstacle(&mut self, p: Pos) -> bool {
        let Some(current) = self.cell(p).map(|c| c.obstacle) else {
            return false;
        };
        self.set_obstacle(p, !current)
    }

    /// Set the obstacle flag at `p`. Same guard as
    /// [`toggle_obstacle`](Self::toggle_obstacle).
    pub fn set_obstacle(&mut self, p: Pos, obstacle: bool) -> bool {
        let Some(i) = self.bounds.index(p) else {
            log::debug!("ignoring obstacle edit outside the grid at {p}");
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.is_endpoint() {
            log::debug!("ignoring obstacle edit on endpoint {p}");
            return false;
        }
        let changed = cell.obstacle != obstacle;
        cell.obstacle = obstacle;
        changed
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        for c in self.cells.iter_mut() {
            c.obstacle = false;
        }
    }

    /// Move the start cell to `p`. An obstacle at `p` is erased.
    pub fn move_start(&mut self, p: Pos) -> Result<()> {
        self.move_endpoint(Role::Start, p)
    }

    /// Move the end cell to `p`. An obstacle at `p` is erased.
    pub fn move_end(&mut self, p: Pos) -> Result<()> {
        self.move_endpoint(Role::End, p)
    }

    /// Exchange the start and end cells.
    pub fn swap_endpoints(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_endpoint() {
                std::mem::swap(&mut c.is_start, &mut c.is_end);
            }
        }
        std::mem::swap(&mut self.start, &mut self.end);
    }

    fn move_endpoint(&mut self, role: Role, p: Pos) -> Result<()> {
        let bounds = self.bounds;
        let Some(to) = bounds.index(p) else {
            return Err(LayoutError::OutOfBounds { role, pos: p, bounds });
        };
        let (current, other) = match role {
            Role::Start => (self.start, self.end),
            Role::End => (self.end, self.start),
        };
        if p == other {
            return Err(LayoutError::SameStartEnd(p));
        }
        if let Some(from) = bounds.index(current) {
            let c = &mut self.cells[from];
            c.is_start &= role != Role::Start;
            c.is_end &= role != Role::End;
        }
        let c = &mut self.cells[to];
        c.obstacle = false;
        match role {
            Role::Start => {
                c.is_start = true;
                self.start = p;
            }
            Role::End => {
                c.is_end = true;
                self.end = p;
            }
        }
        Ok(())
    }
}
