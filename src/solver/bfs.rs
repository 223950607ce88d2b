use std::collections::VecDeque;

use crate::grid::GridSnapshot;
use crate::solver::sealed::Search;
use crate::solver::{Algorithm, GridSolver, SearchResult};
use crate::state::BfsState;

/// Breadth-first search. Cells are marked when enqueued rather than when dequeued,
/// so each cell enters the queue once and the path found is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        Algorithm::Bfs.name()
    }

}

impl Search for BfsSolver {
    fn search(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        let mut state = BfsState::new(grid.len());
        let mut queue = VecDeque::from([start]);
        let mut visited_order = Vec::new();
        state.enqueued.mark(start);

        while let Some(current) = queue.pop_front() {
            visited_order.push(grid.coord(current));
            if current == end {
                return SearchResult {
                    path: state.links.path_to(grid, start, end),
                    visited_order,
                };
            }
            for n in grid.neighbours(current) {
                if state.enqueued.mark(n) {
                    state.links.link(n, current);
                    queue.push_back(n);
                }
            }
        }
        SearchResult::unreachable(visited_order)
    }
}
