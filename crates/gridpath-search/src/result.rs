use gridpath_core::Pos;

/// Outcome of one search run.
///
/// An empty `shortest` means there is no route; that is a normal outcome,
/// not an error. `all_visited` is for diagnostics and visualisation only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The route, start first and end last. Empty if unreachable.
    pub shortest: Vec<Pos>,
    /// Every cell the search examined, in visitation order, without repeats.
    pub all_visited: Vec<Pos>,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.shortest.is_empty()
    }

    /// Number of moves along the route (0 when unreachable).
    #[inline]
    pub fn steps(&self) -> usize {
        self.shortest.len().saturating_sub(1)
    }

    /// Replay order for a presentation layer: every visited cell, then every
    /// route cell.
    pub fn replay(&self) -> impl Iterator<Item = Step> + '_ {
        self.all_visited
            .iter()
            .copied()
            .map(Step::Visit)
            .chain(self.shortest.iter().copied().map(Step::Path))
    }
}

/// One frame of a [`SearchResult::replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Visit(Pos),
    Path(Pos),
}

impl Step {
    #[inline]
    pub fn pos(self) -> Pos {
        match self {
            Step::Visit(p) | Step::Path(p) => p,
        }
    }
}
