//! Plain layout descriptions and the text map format.
//!
//! A text map has one line per grid row:
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#E.
//! ```
//!
//! `#` is an obstacle, `.` an open cell, `S` the start and `E` the end.
//! Leading and trailing whitespace of the whole string is trimmed, but every
//! line must have the same width.

use std::fmt;

use crate::error::{LayoutError, ParseError, Role};
use crate::geom::{Bounds, Pos};
use crate::grid::Grid;

pub const OBSTACLE: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'S';
pub const END: char = 'E';

/// Dimensions, obstacle positions and endpoints of a grid, without any
/// validation. Use [`build`](Layout::build) to obtain a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Pos>,
    pub start: Pos,
    pub end: Pos,
}

impl Layout {
    /// Parse a text map.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut rows = 0;
        let mut obstacles = Vec::new();
        let mut start: Option<Pos> = None;
        let mut end: Option<Pos> = None;

        for (row, line) in s.lines().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    OBSTACLE => obstacles.push(pos),
                    OPEN => {}
                    START => set_once(&mut start, Role::Start, pos)?,
                    END => set_once(&mut end, Role::End, pos)?,
                    _ => return Err(ParseError::InvalidChar { ch, pos }),
                }
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::InconsistentWidth {
                        line: row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Ok(Self {
            rows,
            cols: width.unwrap_or(0),
            obstacles,
            start: start.ok_or(ParseError::Missing(Role::Start))?,
            end: end.ok_or(ParseError::Missing(Role::End))?,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// Validate the layout and build a grid from it.
    ///
    /// Obstacles outside the bounds are ignored.
    pub fn build(&self) -> Result<Grid, LayoutError> {
        let bounds = Grid::check_dimensions(self.rows, self.cols)?;
        let mut mask = vec![false; bounds.len()];
        for &p in &self.obstacles {
            if let Some(i) = bounds.index(p) {
                mask[i] = true;
            }
        }
        Grid::from_mask(self.rows, self.cols, &mask, self.start, self.end)
    }
}

fn set_once(slot: &mut Option<Pos>, role: Role, pos: Pos) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::Duplicate { role, pos });
    }
    *slot = Some(pos);
    Ok(())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.bounds();
        let mut chars = vec![OPEN; bounds.len()];
        for &p in &self.obstacles {
            if let Some(i) = bounds.index(p) {
                chars[i] = OBSTACLE;
            }
        }
        for (p, ch) in [(self.start, START), (self.end, END)] {
            if let Some(i) = bounds.index(p) {
                chars[i] = ch;
            }
        }
        for (r, line) in chars.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in line {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Describe this grid as a [`Layout`].
    pub fn to_layout(&self) -> Layout {
        Layout {
            rows: self.rows(),
            cols: self.cols(),
            obstacles: self.cells().filter(|c| c.is_obstacle()).map(|c| c.pos()).collect(),
            start: self.start(),
            end: self.end(),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLED: &str = "\
S#.
.#.
.#E";

    #[test]
    fn parse_and_build() {
        let layout = Layout::parse(WALLED).unwrap();
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.cols, 3);
        assert_eq!(layout.start, Pos::new(0, 0));
        assert_eq!(layout.end, Pos::new(2, 2));
        assert_eq!(
            layout.obstacles,
            vec![Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)]
        );

        let grid = layout.build().unwrap();
        assert_eq!(grid.obstacle_count(), 3);
        assert_eq!(grid.to_layout(), layout);
    }

    #[test]
    fn display_renders_text_map() {
        let layout = Layout::parse(WALLED).unwrap();
        assert_eq!(layout.to_string(), WALLED);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let layout: Layout = "\n  S.E  \n".parse().unwrap();
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.cols, 3);
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            Layout::parse("S..\n.E"),
            Err(ParseError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char_error() {
        assert_eq!(
            Layout::parse("S.x\n..E"),
            Err(ParseError::InvalidChar {
                ch: 'x',
                pos: Pos::new(0, 2)
            })
        );
    }

    #[test]
    fn endpoint_errors() {
        assert_eq!(Layout::parse("S..\n..."), Err(ParseError::Missing(Role::End)));
        assert_eq!(Layout::parse("...\n..E"), Err(ParseError::Missing(Role::Start)));
        assert_eq!(
            Layout::parse("S.S\n..E"),
            Err(ParseError::Duplicate {
                role: Role::Start,
                pos: Pos::new(0, 2)
            })
        );
    }

    #[test]
    fn build_rejects_walled_endpoint() {
        let layout = Layout {
            rows: 2,
            cols: 2,
            obstacles: vec![Pos::new(1, 1)],
            start: Pos::new(0, 0),
            end: Pos::new(1, 1),
        };
        assert_eq!(
            layout.build(),
            Err(LayoutError::ObstacleAt {
                role: Role::End,
                pos: Pos::new(1, 1)
            })
        );
    }

    #[test]
    fn build_rejects_oversized_dimensions() {
        let layout = Layout {
            rows: usize::MAX,
            cols: 2,
            obstacles: vec![Pos::new(0, 1)],
            start: Pos::new(0, 0),
            end: Pos::new(1, 0),
        };
        assert_eq!(
            layout.build(),
            Err(LayoutError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
    }
}
