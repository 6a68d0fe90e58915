//! Uniform-cost search.
//!
//! Every cell starts in the frontier; each step the frontier is stably
//! sorted by distance and its head is finalised. Cells with equal distance
//! are taken in the order the previous sorts left them, which fixes the
//! tie-breaking (and thus the exact path) for a given grid.
//!
//! Sorting the whole frontier per step is O(V^2 log V), fine for the tens by
//! tens grids this targets.

use gridpath_core::{Grid, Pos};

use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::searcher::{Searcher, UNREACHABLE};

impl Searcher {
    /// Shortest path from `start` to `end` by uniform-cost search.
    ///
    /// `all_visited` lists the finalised cells in order, ending with `end`
    /// when it was reached. Stops early once the nearest remaining cell is
    /// unreachable.
    pub fn dijkstra(&mut self, grid: &Grid, start: Pos, end: Pos) -> SearchResult {
        let Some((si, ei)) = self.prepare(Algorithm::Dijkstra, grid, start, end) else {
            return SearchResult::default();
        };
        let bounds = self.bounds;

        let mut unvisited: Vec<usize> = (0..bounds.len()).collect();
        self.nodes[si].g = 0;
        let mut all_visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while !unvisited.is_empty() {
            let nodes = &self.nodes;
            unvisited.sort_by_key(|&i| nodes[i].g);
            let ci = unvisited.remove(0);
            let cp = bounds.pos(ci);

            if grid.is_obstacle(cp) {
                continue;
            }
            let dist = self.nodes[ci].g;
            if dist == UNREACHABLE {
                break;
            }

            self.nodes[ci].visited = true;
            all_visited.push(cp);
            log::trace!("dijkstra: visit {cp} at {dist}");
            if ci == ei {
                break;
            }

            for &np in nbuf.passable(grid, cp) {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                // Unconditional: the grid is bipartite with unit steps, so an
                // unvisited neighbour never already holds a smaller distance.
                n.g = dist + 1;
                n.parent = ci;
            }
        }

        self.nbuf = nbuf;
        let shortest = if self.nodes[ei].visited {
            self.path_to(ei)
        } else {
            Vec::new()
        };
        self.finish(shortest, all_visited)
    }
}

/// Run [`Searcher::dijkstra`] with a throwaway searcher.
pub fn dijkstra(grid: &Grid, start: Pos, end: Pos) -> SearchResult {
    Searcher::for_grid(grid).dijkstra(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Layout;

    fn grid(map: &str) -> Grid {
        Layout::parse(map).unwrap().build().unwrap()
    }

    #[test]
    fn open_3x3_path_has_four_steps() {
        let g = grid("S..\n...\n..E");
        let r = dijkstra(&g, g.start(), g.end());
        assert_eq!(r.shortest.len(), 5);
        assert_eq!(r.shortest.first(), Some(&g.start()));
        assert_eq!(r.shortest.last(), Some(&g.end()));
        assert_eq!(r.all_visited.first(), Some(&g.start()));
        assert_eq!(r.all_visited.last(), Some(&g.end()));
    }

    #[test]
    fn tie_break_follows_frontier_order() {
        // Down is relaxed before right, but the frontier is row-major, so
        // (0, 1) precedes (1, 0) among the distance-1 cells.
        let g = grid("S..\n...\n..E");
        let r = dijkstra(&g, g.start(), g.end());
        assert_eq!(
            &r.all_visited[..3],
            &[Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0)]
        );
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let g = grid("S#E\n.#.\n.#.");
        let r = dijkstra(&g, g.start(), g.end());
        assert!(r.shortest.is_empty());
        assert_eq!(
            r.all_visited,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]
        );
    }

    #[test]
    fn detours_around_wall() {
        let g = grid(
            "\
S.#..
..#..
.....
..#.E",
        );
        let mut s = Searcher::for_grid(&g);
        let r = s.dijkstra(&g, g.start(), g.end());
        assert_eq!(r.steps(), 7);
        assert_eq!(s.distance_at(g.end()), Some(7));
        assert!(r.shortest.iter().all(|&p| !g.is_obstacle(p)));
    }

    #[test]
    fn obstacles_never_visited() {
        let g = grid("S.#\n.##\n..E");
        let r = dijkstra(&g, g.start(), g.end());
        assert!(r.all_visited.iter().all(|&p| !g.is_obstacle(p)));
        assert_eq!(r.steps(), 4);
    }

    #[test]
    fn rerun_on_same_searcher_is_identical() {
        let g = grid("S..#\n.#..\n...E");
        let mut s = Searcher::for_grid(&g);
        let a = s.dijkstra(&g, g.start(), g.end());
        let b = s.dijkstra(&g, g.start(), g.end());
        assert_eq!(a, b);
    }

    #[test]
    fn outside_endpoint_gives_empty_result() {
        let g = grid("S.\n.E");
        let r = dijkstra(&g, Pos::new(5, 5), g.end());
        assert_eq!(r, SearchResult::default());
    }
}
