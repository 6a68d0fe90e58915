use gridpath_core::{Bounds, Grid, Pos};

use crate::algorithm::Algorithm;
use crate::neighbors::{NeighborTable, Neighbors};
use crate::result::SearchResult;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell scratch
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Distance from the start (Dijkstra distance, A* g, DFS depth).
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) f: u32,
    pub(crate) parent: usize,
    pub(crate) visited: bool,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: NO_PARENT,
            visited: false,
            open: false,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Owner of all per-run search state for grids of one size.
///
/// A `Grid` holds only topology; distances, parents and visited flags live
/// here. Every search resets that scratch on entry, so the same grid can be
/// searched any number of times, with any strategy, without the caller
/// clearing anything. Buffers are kept between runs and reallocated only
/// when a grid of different dimensions is searched.
#[derive(Clone, Debug)]
pub struct Searcher {
    pub(crate) bounds: Bounds,
    pub(crate) nodes: Vec<Node>,
    pub(crate) table: Option<NeighborTable>,
    pub(crate) nbuf: Neighbors,
    last: Option<Algorithm>,
}

impl Searcher {
    /// Create a searcher for grids of the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            table: None,
            nbuf: Neighbors::new(),
            last: None,
        }
    }

    /// Create a searcher sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid bounds the scratch buffers are sized for.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The strategy of the most recent run, if any.
    #[inline]
    pub fn last_algorithm(&self) -> Option<Algorithm> {
        self.last
    }

    /// Run `algorithm` from `start` to `end`.
    pub fn run(&mut self, algorithm: Algorithm, grid: &Grid, start: Pos, end: Pos) -> SearchResult {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra(grid, start, end),
            Algorithm::AStar => self.astar(grid, start, end),
            Algorithm::DepthFirst => self.dfs(grid, start, end),
        }
    }

    // -----------------------------------------------------------------------
    // Diagnostics of the last run
    // -----------------------------------------------------------------------

    /// Distance from the start recorded for `p` by the last run.
    ///
    /// For Dijkstra this is the tentative or final distance, for A* the `g`
    /// cost, for DFS the depth along the discovered path. `None` if the cell
    /// was never reached or is outside the bounds.
    pub fn distance_at(&self, p: Pos) -> Option<u32> {
        let i = self.bounds.index(p)?;
        let g = self.nodes[i].g;
        (g != UNREACHABLE).then_some(g)
    }

    /// Whether the last run visited `p`.
    pub fn visited_at(&self, p: Pos) -> bool {
        self.bounds
            .index(p)
            .is_some_and(|i| self.nodes[i].visited)
    }

    /// Predecessor of `p` on the best-known path of the last run.
    pub fn parent_of(&self, p: Pos) -> Option<Pos> {
        let i = self.bounds.index(p)?;
        let parent = self.nodes[i].parent;
        (parent != NO_PARENT).then(|| self.bounds.pos(parent))
    }

    // -----------------------------------------------------------------------
    // Shared run plumbing
    // -----------------------------------------------------------------------

    /// Resize for `grid` if needed, reset all scratch and resolve the
    /// endpoints to indices. Returns `None` if either endpoint is outside
    /// the grid or is an obstacle.
    pub(crate) fn prepare(&mut self, algorithm: Algorithm, grid: &Grid, start: Pos, end: Pos) -> Option<(usize, usize)> {
        self.last = Some(algorithm);
        if grid.bounds() != self.bounds {
            self.set_bounds(grid.bounds());
        }
        for n in self.nodes.iter_mut() {
            *n = Node::default();
        }

        let (Some(si), Some(ei)) = (self.bounds.index(start), self.bounds.index(end)) else {
            log::warn!(
                "{algorithm}: endpoints {start} -> {end} outside the {} grid",
                self.bounds
            );
            return None;
        };
        if grid.is_obstacle(start) || grid.is_obstacle(end) {
            log::warn!("{algorithm}: endpoints {start} -> {end} include an obstacle");
            return None;
        }
        Some((si, ei))
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.nodes.clear();
        self.nodes.resize(bounds.len(), Node::default());
        if self.table.as_ref().is_some_and(|t| t.bounds() != bounds) {
            self.table = None;
        }
    }

    /// Walk parent links back from `idx` and return the path start -> `idx`.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.bounds.pos(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    pub(crate) fn finish(&self, shortest: Vec<Pos>, all_visited: Vec<Pos>) -> SearchResult {
        if let Some(algorithm) = self.last {
            if shortest.is_empty() {
                log::debug!(
                    "{algorithm}: no route, {} cells visited",
                    all_visited.len()
                );
            } else {
                log::debug!(
                    "{algorithm}: route of {} steps, {} cells visited",
                    shortest.len() - 1,
                    all_visited.len()
                );
            }
        }
        SearchResult {
            shortest,
            all_visited,
        }
    }
}
