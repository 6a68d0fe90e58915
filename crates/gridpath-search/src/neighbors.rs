use gridpath_core::{Bounds, Grid, Pos};

/// Orthogonal in-bounds neighbours of `p`, in the order down, up, right, left.
///
/// Obstacles are included.
pub fn neighbors(grid: &Grid, p: Pos) -> impl Iterator<Item = Pos> {
    let bounds = grid.bounds();
    p.neighbors_4().into_iter().filter(move |&n| bounds.contains(n))
}

/// Like [`neighbors`], but without obstacle cells.
pub fn passable_neighbors(grid: &Grid, p: Pos) -> impl Iterator<Item = Pos> + '_ {
    p.neighbors_4().into_iter().filter(|&n| grid.is_passable(n))
}

/// Scratch list of a cell's passable or in-bounds neighbours.
///
/// A `Searcher` keeps one of these so Dijkstra and DFS expand cells without
/// allocating.
#[derive(Clone, Debug)]
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-bounds neighbours of `p`, obstacles included.
    pub fn all(&mut self, grid: &Grid, p: Pos) -> &[Pos] {
        self.buf.clear();
        self.buf.extend(neighbors(grid, p));
        &self.buf
    }

    /// In-bounds neighbours of `p` that are not obstacles.
    pub fn passable(&mut self, grid: &Grid, p: Pos) -> &[Pos] {
        self.buf.clear();
        self.buf.extend(passable_neighbors(grid, p));
        &self.buf
    }
}

// ---------------------------------------------------------------------------
// NeighborTable
// ---------------------------------------------------------------------------

/// Up to four neighbour indices of one cell.
#[derive(Clone, Copy, Debug, Default)]
struct Adjacent {
    idx: [usize; 4],
    len: u8,
}

/// Unfiltered neighbour lists for every cell of a grid, as flat indices.
///
/// Unfiltered neighbours depend only on the grid dimensions, so a table stays
/// valid across obstacle edits and is rebuilt only when the bounds change.
#[derive(Clone, Debug)]
pub(crate) struct NeighborTable {
    bounds: Bounds,
    adj: Vec<Adjacent>,
}

impl NeighborTable {
    pub(crate) fn new(bounds: Bounds) -> Self {
        let adj = bounds
            .iter()
            .map(|p| {
                let mut a = Adjacent::default();
                for n in p.neighbors_4() {
                    if let Some(i) = bounds.index(n) {
                        a.idx[a.len as usize] = i;
                        a.len += 1;
                    }
                }
                a
            })
            .collect();
        Self { bounds, adj }
    }

    #[inline]
    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Neighbour indices of cell `idx`, in resolver order.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &[usize] {
        let a = &self.adj[idx];
        &a.idx[..a.len as usize]
    }
}
