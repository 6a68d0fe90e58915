//! Depth-first search.
//!
//! Not a shortest-path algorithm: it returns the first route it stumbles
//! upon. Each stack entry carries the cell that pushed it; that becomes the
//! cell's parent when it is first popped, so the route is rebuilt from
//! back-pointers instead of copying a path into every entry.

use gridpath_core::{Grid, Pos};

use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::searcher::{NO_PARENT, Searcher};

impl Searcher {
    /// Some route from `start` to `end`, found depth-first.
    ///
    /// Neighbours are pushed down, up, right, left, so left is explored
    /// first. `all_visited` lists cells in the order they were first popped.
    pub fn dfs(&mut self, grid: &Grid, start: Pos, end: Pos) -> SearchResult {
        let Some((si, ei)) = self.prepare(Algorithm::DepthFirst, grid, start, end) else {
            return SearchResult::default();
        };
        let bounds = self.bounds;

        let mut stack: Vec<(usize, usize)> = vec![(si, NO_PARENT)];
        let mut all_visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((ci, from)) = stack.pop() else {
                break 'search false;
            };
            let cp = bounds.pos(ci);
            if self.nodes[ci].visited || grid.is_obstacle(cp) {
                continue;
            }

            let depth = match from {
                NO_PARENT => 0,
                p => self.nodes[p].g + 1,
            };
            let n = &mut self.nodes[ci];
            n.visited = true;
            n.parent = from;
            n.g = depth;
            all_visited.push(cp);
            log::trace!("dfs: visit {cp} at depth {depth}");

            if ci == ei {
                break 'search true;
            }

            for &np in nbuf.passable(grid, cp) {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if !self.nodes[ni].visited {
                    stack.push((ni, ci));
                }
            }
        };

        self.nbuf = nbuf;
        let shortest = if found { self.path_to(ei) } else { Vec::new() };
        self.finish(shortest, all_visited)
    }
}

/// Run [`Searcher::dfs`] with a throwaway searcher.
pub fn depth_first_search(grid: &Grid, start: Pos, end: Pos) -> SearchResult {
    Searcher::for_grid(grid).dfs(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Layout;

    fn grid(map: &str) -> Grid {
        Layout::parse(map).unwrap().build().unwrap()
    }

    #[test]
    fn explores_last_pushed_first() {
        // Left is pushed last and popped first, so the search snakes through
        // every cell before reaching the corner.
        let g = grid("S..\n...\n..E");
        let r = depth_first_search(&g, g.start(), g.end());
        assert_eq!(
            r.shortest,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 2),
                Pos::new(1, 1),
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2)
            ]
        );
        assert_eq!(r.all_visited, r.shortest);
    }

    #[test]
    fn route_may_be_longer_than_shortest() {
        let g = grid(
            "\
S...
....
E...",
        );
        let r = depth_first_search(&g, g.start(), g.end());
        assert!(r.steps() > 2);
        for w in r.shortest.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        assert_eq!(r.shortest.first(), Some(&g.start()));
        assert_eq!(r.shortest.last(), Some(&g.end()));
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let g = grid("S#E\n.#.\n.#.");
        let r = depth_first_search(&g, g.start(), g.end());
        assert!(r.shortest.is_empty());
        let mut seen = r.all_visited.clone();
        seen.sort();
        assert_eq!(seen, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
    }

    #[test]
    fn depth_is_recorded() {
        let g = grid("S..\n...\n..E");
        let mut s = Searcher::for_grid(&g);
        let r = s.dfs(&g, g.start(), g.end());
        for (i, &p) in r.shortest.iter().enumerate() {
            assert_eq!(s.distance_at(p), Some(i as u32));
        }
        assert_eq!(s.parent_of(g.start()), None);
    }
}
