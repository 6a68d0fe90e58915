use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::DepthFirst];

    /// Whether the returned route is guaranteed to be a shortest one.
    #[inline]
    pub const fn guarantees_shortest(self) -> bool {
        !matches!(self, Algorithm::DepthFirst)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::DepthFirst => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected dijkstra, astar or dfs)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
