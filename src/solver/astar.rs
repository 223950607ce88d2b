use log::trace;

use crate::frontier::{MinFrontier, TieBreak};
use crate::grid::GridSnapshot;
use crate::solver::sealed::Search;
use crate::solver::{Algorithm, GridSolver, SearchResult};
use crate::state::AstarState;
use crate::{Cost, STEP_COST};

/// A* guided by the Manhattan distance to the end. On a 4-connected grid with unit
/// steps that heuristic is consistent, so the first time the end is finalized its
/// path is a shortest one. Among open cells with equal f, the one pushed first is
/// expanded first.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    /// Manhattan distance between the cells at two flat indices.
    pub fn heuristic(grid: &GridSnapshot, from: usize, to: usize) -> Cost {
        grid.coord(from).manhattan_distance(&grid.coord(to)) as Cost * STEP_COST
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        Algorithm::Astar.name()
    }

}

impl Search for AstarSolver {
    fn search(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        let mut state = AstarState::new(grid.len());
        let mut open = MinFrontier::new(TieBreak::Insertion);
        let mut visited_order = Vec::new();

        let f = state.set_score(start, 0, Self::heuristic(grid, start, end));
        open.push(start, f);

        while let Some((current, _)) = open.pop() {
            // Improved cells are pushed again rather than updated in place, so
            // older entries for finalized cells turn up here.
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

            let score = state.score(current);
            trace!(
                "A*: expanding {} (g = {}, h = {}, f = {})",
                grid.coord(current),
                score.g,
                score.h,
                score.f
            );
            let tentative_g = score.g + STEP_COST;
            for n in grid.neighbours(current) {
                if state.visited.is_marked(n) || tentative_g >= state.score(n).g {
                    continue;
                }
                state.links.link(n, current);
                let f = state.set_score(n, tentative_g, Self::heuristic(grid, n, end));
                open.push(n, f);
            }
        }
        SearchResult::unreachable(visited_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = GridSnapshot::open(1, 1).unwrap();
        let start = Coord::new(0, 0);
        let result = AstarSolver.run(&grid, start, start).unwrap();
        assert_eq!(result.visited_order, vec![start]);
        assert_eq!(result.path, vec![start]);
    }

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        let grid = GridSnapshot::from_walls(3, 3, [Coord::new(1, 1)]).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(2, 2);
        let result = AstarSolver.run(&grid, start, end).unwrap();
        assert_eq!(result.path.len(), 5);
        assert!(result.path_is_valid(&grid, start, end));
    }

    #[test]
    fn test_complex() {
        let walls = [
            Coord::new(1, 1),
            Coord::new(0, 5),
            Coord::new(5, 0),
            Coord::new(8, 8),
        ];
        let grid = GridSnapshot::from_walls(10, 10, walls).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(7, 7);
        let result = AstarSolver.run(&grid, start, end).unwrap();
        assert_eq!(result.path.len(), 15);
        // The heuristic keeps the search inside the start-end bounding box.
        assert!(result
            .visited_order
            .iter()
            .all(|c| c.row <= end.row && c.col <= end.col));
    }

    /// Cells with equal f are expanded in the order they were pushed.
    #[test]
    fn ties_expand_first_pushed() {
        //  __
        // |S.|
        // |.E|
        //  __
        let grid = GridSnapshot::open(2, 2).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(1, 1);
        let result = AstarSolver.run(&grid, start, end).unwrap();
        // (1, 0) is pushed before (0, 1) because down precedes right.
        assert_eq!(
            result.visited_order,
            vec![start, Coord::new(1, 0), Coord::new(0, 1), end]
        );
        assert_eq!(result.path, vec![start, Coord::new(1, 0), end]);
    }

    #[test]
    fn heuristic_is_manhattan() {
        let grid = GridSnapshot::open(5, 5).unwrap();
        let from = grid.index(Coord::new(0, 4));
        let to = grid.index(Coord::new(3, 1));
        assert_eq!(AstarSolver::heuristic(&grid, from, to), 6);
    }
}
