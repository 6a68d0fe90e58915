//! Search strategies over a [`gridpath_core::Grid`].
//!
//! Three strategies share one neighbour resolver and one result type:
//!
//! - **Dijkstra** uniform-cost search ([`Searcher::dijkstra`], [`dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`Searcher::astar`], [`astar`])
//! - **Depth-first** search ([`Searcher::dfs`], [`depth_first_search`]),
//!   which finds *a* route, not necessarily a shortest one
//!
//! Moves are orthogonal with unit cost. Neighbours are always resolved in the
//! order down, up, right, left, which makes every strategy deterministic.
//!
//! [`Searcher`] owns the per-run scratch (distances, parents, visited flags)
//! and resets it on every call, so a grid can be searched repeatedly. The
//! free functions build a throwaway searcher. A search over one grid is
//! single-threaded and runs to completion.

mod algorithm;
mod astar;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod result;
mod searcher;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use dfs::depth_first_search;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use neighbors::{Neighbors, neighbors, passable_neighbors};
pub use result::{SearchResult, Step};
pub use searcher::{Searcher, UNREACHABLE};

/// Run `algorithm` on `grid` between its own start and end cells.
pub fn search(algorithm: Algorithm, grid: &gridpath_core::Grid) -> SearchResult {
    Searcher::for_grid(grid).run(algorithm, grid, grid.start(), grid.end())
}
