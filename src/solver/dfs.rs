use crate::grid::GridSnapshot;
use crate::solver::sealed::Search;
use crate::solver::{Algorithm, GridSolver, SearchResult};
use crate::state::DfsState;

/// Depth-first search with an explicit stack. Neighbours are pushed in the usual
/// up, down, left, right order, so they are explored right, left, down, up. A cell
/// may sit on the stack several times; it is marked visited when first popped and
/// later copies are skipped. The path found is valid but generally not shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        Algorithm::Dfs.name()
    }

}

impl Search for DfsSolver {
    fn search(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        let mut state = DfsState::new(grid.len());
        let mut stack = vec![start];
        let mut visited_order = Vec::new();

        while let Some(current) = stack.pop() {
            if !state.visited.mark(current) {
                continue;
            }
            visited_order.push(grid.coord(current));
            if current == end {
                return SearchResult {
                    path: state.links.path_to(grid, start, end),
                    visited_order,
                };
            }
            for n in grid.neighbours(current) {
                if !state.visited.is_marked(n) {
                    // The latest push of a cell is the copy that gets popped first.
                    state.links.link(n, current);
                    stack.push(n);
                }
            }
        }
        SearchResult::unreachable(visited_order)
    }
}
