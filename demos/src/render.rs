//! Text rendering of a grid with a search result drawn over it.

use gridpath_core::Grid;
use gridpath_core::layout::{END, OBSTACLE, OPEN, START};
use gridpath_search::SearchResult;

pub const VISITED: char = 'o';
pub const ROUTE: char = '*';

/// Render `grid` as a text map, marking visited cells and the route.
///
/// Endpoints and obstacles are never overdrawn.
pub fn overlay(grid: &Grid, result: &SearchResult) -> String {
    let bounds = grid.bounds();
    let mut chars: Vec<char> = grid
        .cells()
        .map(|c| {
            if c.is_start() {
                START
            } else if c.is_end() {
                END
            } else if c.is_obstacle() {
                OBSTACLE
            } else {
                OPEN
            }
        })
        .collect();

    for (marks, ch) in [(&result.all_visited, VISITED), (&result.shortest, ROUTE)] {
        for &p in marks {
            if let Some(i) = bounds.index(p) {
                if chars[i] == OPEN || chars[i] == VISITED {
                    chars[i] = ch;
                }
            }
        }
    }

    chars
        .chunks(bounds.cols)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
