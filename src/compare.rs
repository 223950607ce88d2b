//! Runs several algorithms over one snapshot, as the side-by-side view does.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{info, log_enabled, Level};

use crate::error::Result;
use crate::grid::{Coord, GridSnapshot};
use crate::solver::{Algorithm, GridStats, SearchResult};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Results of one comparison, in the order the algorithms were selected.
#[derive(Clone, Debug, Default)]
pub struct Comparison {
    results: FxIndexMap<Algorithm, SearchResult>,
}

impl Comparison {
    pub fn get(&self, algorithm: Algorithm) -> Option<&SearchResult> {
        self.results.get(&algorithm)
    }
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.results.keys().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &SearchResult)> {
        self.results.iter().map(|(&a, r)| (a, r))
    }
    pub fn stats(&self) -> impl Iterator<Item = (Algorithm, GridStats)> + '_ {
        self.iter().map(|(a, r)| (a, r.stats()))
    }
    pub fn len(&self) -> usize {
        self.results.len()
    }
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl PartialEq for Comparison {
    /// Equal if the same algorithms ran in the same order with the same results.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Checks both endpoints and logs up front when they lie in different regions.
/// Returns the selection with repeats removed.
fn prepare(
    grid: &GridSnapshot,
    start: Coord,
    end: Coord,
    algorithms: &[Algorithm],
) -> Result<Vec<Algorithm>> {
    grid.endpoint_index(start)?;
    grid.endpoint_index(end)?;
    if log_enabled!(Level::Info) && !grid.components().reachable(start, end) {
        info!("{} is not reachable from {}", end, start);
    }
    Ok(algorithms.iter().copied().unique().collect())
}

/// Runs each selected algorithm on the same snapshot, one after another. Repeated
/// selections run once.
pub fn compare(
    grid: &GridSnapshot,
    start: Coord,
    end: Coord,
    algorithms: &[Algorithm],
) -> Result<Comparison> {
    let selection = prepare(grid, start, end, algorithms)?;
    let mut results = FxIndexMap::default();
    for algorithm in selection {
        results.insert(algorithm, algorithm.run(grid, start, end)?);
    }
    Ok(Comparison { results })
}

/// Like [compare], but each algorithm runs on its own scoped thread. The snapshot is
/// shared by reference and every run owns its own state, so the results are the
/// same as those of [compare].
pub fn compare_parallel(
    grid: &GridSnapshot,
    start: Coord,
    end: Coord,
    algorithms: &[Algorithm],
) -> Result<Comparison> {
    let selection = prepare(grid, start, end, algorithms)?;
    let runs = std::thread::scope(|scope| {
        let handles = selection
            .iter()
            .map(|&algorithm| scope.spawn(move || (algorithm, algorithm.run(grid, start, end))))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(run) => run,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Vec<_>>()
    });
    let mut results = FxIndexMap::default();
    for (algorithm, result) in runs {
        results.insert(algorithm, result?);
    }
    Ok(Comparison { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn keeps_selection_order_without_repeats() {
        let board: Board = "S...\n.##.\n...E".parse().unwrap();
        let grid = board.snapshot();
        let selection = [
            Algorithm::Dfs,
            Algorithm::Astar,
            Algorithm::Dfs,
            Algorithm::Bfs,
        ];
        let comparison = compare(&grid, board.start(), board.end(), &selection).unwrap();
        assert_eq!(
            comparison.algorithms().collect::<Vec<_>>(),
            vec![Algorithm::Dfs, Algorithm::Astar, Algorithm::Bfs]
        );
        assert!(comparison.get(Algorithm::Dijkstra).is_none());
        for (algorithm, stats) in comparison.stats() {
            if algorithm.is_optimal() {
                assert_eq!(stats.path_length, 6);
            }
            assert!(stats.visited_nodes <= grid.len());
        }
    }

    /// Endpoints in separate regions still run every algorithm to exhaustion.
    #[test]
    fn unreachable_end_runs_everything() {
        let board: Board = "S#.\n.#E".parse().unwrap();
        let grid = board.snapshot();
        let components = grid.components();
        assert!(!components.reachable(board.start(), board.end()));
        let comparison = compare(&grid, board.start(), board.end(), &Algorithm::ALL).unwrap();
        assert_eq!(comparison.len(), 4);
        for (_, stats) in comparison.stats() {
            assert_eq!(stats.path_length, 0);
            assert_eq!(stats.visited_nodes, components.size(board.start()));
        }
    }

    #[test]
    fn empty_selection() {
        let grid = GridSnapshot::open(2, 2).unwrap();
        let comparison = compare(&grid, Coord::new(0, 0), Coord::new(1, 1), &[]).unwrap();
        assert!(comparison.is_empty());
    }

    #[test]
    fn invalid_endpoint_fails_before_running() {
        let grid = GridSnapshot::open(2, 2).unwrap();
        assert!(compare(&grid, Coord::new(0, 0), Coord::new(2, 2), &Algorithm::ALL).is_err());
        assert!(
            compare_parallel(&grid, Coord::new(9, 0), Coord::new(1, 1), &Algorithm::ALL).is_err()
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let board: Board = "
            S..#......
            .#.#.####.
            .#...#....
            .####..##.
            ......#..E
        "
        .parse()
        .unwrap();
        let grid = board.snapshot();
        let sequential = compare(&grid, board.start(), board.end(), &Algorithm::ALL).unwrap();
        let parallel =
            compare_parallel(&grid, board.start(), board.end(), &Algorithm::ALL).unwrap();
        assert_eq!(sequential.len(), 4);
        assert_eq!(sequential, parallel);
    }
}
