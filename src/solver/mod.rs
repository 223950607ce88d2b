use core::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use crate::error::Result;
use crate::grid::{Coord, GridSnapshot};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Output of a single search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells in the order they were finalized. Contains no duplicates.
    pub visited_order: Vec<Coord>,
    /// Start to end inclusive, or empty if the end was not reached.
    pub path: Vec<Coord>,
}

impl SearchResult {
    pub(crate) fn unreachable(visited_order: Vec<Coord>) -> SearchResult {
        SearchResult {
            visited_order,
            path: Vec::new(),
        }
    }
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of moves along the path, [None] if no path was found.
    pub fn path_cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
    pub fn stats(&self) -> GridStats {
        GridStats {
            visited_nodes: self.visited_order.len(),
            path_length: self.path.len(),
        }
    }
    /// Checks that the path starts and ends at the given cells, only steps between
    /// orthogonal neighbours and never enters a wall. An empty path is valid.
    pub fn path_is_valid(&self, grid: &GridSnapshot, start: Coord, end: Coord) -> bool {
        if self.path.is_empty() {
            return true;
        }
        self.path.first() == Some(&start)
            && self.path.last() == Some(&end)
            && self.path.iter().all(|&c| grid.can_move_to(c))
            && self
                .path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_adjacent(b))
    }
}

/// Counters shown next to each run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub visited_nodes: usize,
    pub path_length: usize,
}

mod sealed {
    use crate::grid::GridSnapshot;
    use crate::solver::SearchResult;

    /// The search proper, on flat indices that [GridSolver::run](super::GridSolver::run)
    /// has already checked. Not nameable outside the crate, so `run` is the only way in.
    pub trait Search {
        fn search(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult;
    }
}

/// A search algorithm over a [GridSnapshot]. Implemented by the solvers in this crate
/// only.
///
/// The raw search is not reachable from outside, so endpoints always go through
/// validation:
///
/// ```compile_fail
/// use grid_search::{BfsSolver, GridSnapshot};
///
/// let grid = GridSnapshot::open(1, 3).unwrap();
/// BfsSolver.search(&grid, 0, 2);
/// ```
pub trait GridSolver: sealed::Search {
    fn name(&self) -> &'static str;

    /// Searches from `start` to `end`. Fails with
    /// [InvalidCoordinate](crate::SearchError::InvalidCoordinate) if either endpoint is
    /// off the grid or on a wall; an unreachable end is reported as an empty path.
    fn run(&self, grid: &GridSnapshot, start: Coord, end: Coord) -> Result<SearchResult> {
        let start_ix = grid.endpoint_index(start)?;
        let end_ix = grid.endpoint_index(end)?;
        debug!(
            "{}: searching {} -> {} on a {}x{} grid",
            self.name(),
            start,
            end,
            grid.rows(),
            grid.cols()
        );
        let result = sealed::Search::search(self, grid, start_ix, end_ix);
        info!(
            "{}: finalized {} cells, path of {} cells",
            self.name(),
            result.visited_order.len(),
            result.path.len()
        );
        Ok(result)
    }
}

/// The algorithms that can be compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Astar,
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Astar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Astar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Astar => "Best for finding the shortest path with heuristics.",
            Algorithm::Dijkstra => "Guarantees the shortest path without heuristics.",
            Algorithm::Bfs => "Finds the shortest path in unweighted graphs.",
            Algorithm::Dfs => "Explores as far as possible along each branch.",
        }
    }

    /// Whether a found path is always a shortest one.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Runs this algorithm with its default settings.
    pub fn run(&self, grid: &GridSnapshot, start: Coord, end: Coord) -> Result<SearchResult> {
        match self {
            Algorithm::Astar => AstarSolver.run(grid, start, end),
            Algorithm::Dijkstra => DijkstraSolver::default().run(grid, start, end),
            Algorithm::Bfs => BfsSolver.run(grid, start, end),
            Algorithm::Dfs => DfsSolver.run(grid, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the display names as well as `astar`, `bfs`, `dfs` in any case.
    fn from_str(s: &str) -> std::result::Result<Algorithm, ParseAlgorithmError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Algorithm::Astar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}
