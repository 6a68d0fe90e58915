//! A* search with explicit open and closed lists.
//!
//! The open list is a plain `Vec` scanned linearly for the lowest `f`; on
//! ties the earliest entry wins, so insertion order (down, up, right, left
//! per expanded cell) decides between equally promising cells.

use gridpath_core::{Grid, Pos};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::neighbors::NeighborTable;
use crate::result::SearchResult;
use crate::searcher::Searcher;

impl Searcher {
    /// Shortest path from `start` to `end` using A* with the Manhattan
    /// heuristic.
    ///
    /// `all_visited` lists the cells in the order they were taken off the
    /// open list, ending with `end` when it was reached.
    pub fn astar(&mut self, grid: &Grid, start: Pos, end: Pos) -> SearchResult {
        let Some((si, ei)) = self.prepare(Algorithm::AStar, grid, start, end) else {
            return SearchResult::default();
        };
        let bounds = self.bounds;
        let table = self.table.get_or_insert_with(|| NeighborTable::new(bounds));

        {
            let n = &mut self.nodes[si];
            n.g = 0;
            n.h = manhattan(start, end);
            n.f = n.h;
            n.open = true;
        }
        let mut open: Vec<usize> = vec![si];
        let mut all_visited = Vec::new();

        let found = 'search: loop {
            if open.is_empty() {
                break 'search false;
            }
            let mut lowest = 0;
            for (i, &ni) in open.iter().enumerate() {
                if self.nodes[ni].f < self.nodes[open[lowest]].f {
                    lowest = i;
                }
            }

            let ci = open[lowest];
            let cp = bounds.pos(ci);
            self.nodes[ci].visited = true;
            all_visited.push(cp);
            if ci == ei {
                break 'search true;
            }

            open.remove(lowest);
            let current = &mut self.nodes[ci];
            current.open = false;
            current.closed = true;
            let current_g = current.g;
            log::trace!("astar: expand {cp} g={current_g}");

            for &ni in table.get(ci) {
                if self.nodes[ni].closed {
                    continue;
                }
                let np = bounds.pos(ni);
                // Obstacles never enter the open list.
                if grid.is_obstacle(np) {
                    continue;
                }
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if !n.open {
                    n.open = true;
                    open.push(ni);
                } else if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.h = manhattan(np, end);
                n.f = n.g + n.h;
                n.parent = ci;
            }
        };

        let shortest = if found { self.path_to(ei) } else { Vec::new() };
        self.finish(shortest, all_visited)
    }
}

/// Run [`Searcher::astar`] with a throwaway searcher.
pub fn astar(grid: &Grid, start: Pos, end: Pos) -> SearchResult {
    Searcher::for_grid(grid).astar(grid, start, end)
}
