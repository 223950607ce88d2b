use log::trace;

use crate::frontier::{MinFrontier, TieBreak};
use crate::grid::GridSnapshot;
use crate::solver::sealed::Search;
use crate::solver::{Algorithm, GridSolver, SearchResult};
use crate::state::DijkstraState;
use crate::{Cost, STEP_COST};

/// How Dijkstra picks the next cell to finalize. Both strategies pick the unvisited
/// cell with the smallest distance, breaking ties by grid scan order, and therefore
/// produce identical results; they only differ in running time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Binary heap keyed by `(distance, index)`, O(n log n).
    #[default]
    Heap,
    /// Rescans every unvisited cell each step, O(n²).
    Scan,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver {
    pub selection: Selection,
}

impl DijkstraSolver {
    pub fn new(selection: Selection) -> DijkstraSolver {
        DijkstraSolver { selection }
    }

    fn search_heap(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        let mut state = DijkstraState::new(grid.len(), start);
        let mut frontier = MinFrontier::new(TieBreak::Index);
        let mut visited_order = Vec::new();
        frontier.push(start, 0 as Cost);

        while let Some((current, distance)) = frontier.pop() {
            if state.visited.is_marked(current) || distance > state.distance.get(current) {
                continue;
            }
            state.visited.mark(current);
            visited_order.push(grid.coord(current));
            if current == end {
                return SearchResult {
                    path: state.links.path_to(grid, start, end),
                    visited_order,
                };
            }
            relax(grid, &mut state, current, |n, distance| {
                frontier.push(n, distance)
            });
        }
        SearchResult::unreachable(visited_order)
    }

    fn search_scan(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        let mut state = DijkstraState::new(grid.len(), start);
        let mut unvisited: Vec<usize> = (0..grid.len())
            .filter(|&ix| grid.can_move_to(grid.coord(ix)))
            .collect();
        let mut visited_order = Vec::new();

        loop {
            let Some((pos, current)) = unvisited
                .iter()
                .copied()
                .enumerate()
                .min_by_key(|&(_, ix)| (state.distance.get(ix), ix))
            else {
                break;
            };
            if !state.distance.is_reached(current) {
                // Everything left is cut off from the start.
                break;
            }
            unvisited.swap_remove(pos);
            state.visited.mark(current);
            visited_order.push(grid.coord(current));
            if current == end {
                return SearchResult {
                    path: state.links.path_to(grid, start, end),
                    visited_order,
                };
            }
            relax(grid, &mut state, current, |_, _| {});
        }
        SearchResult::unreachable(visited_order)
    }
}

/// Lowers the distance of every unvisited neighbour that can be reached more cheaply
/// through `current`, handing each improved neighbour and its new distance to
/// `improved`.
fn relax(
    grid: &GridSnapshot,
    state: &mut DijkstraState,
    current: usize,
    mut improved: impl FnMut(usize, Cost),
) {
    let candidate = state.distance.get(current) + STEP_COST;
    for n in grid.neighbours(current) {
        if state.visited.is_marked(n) || candidate >= state.distance.get(n) {
            continue;
        }
        trace!(
            "Dijkstra: {} now at distance {}",
            grid.coord(n),
            candidate
        );
        state.distance.set(n, candidate);
        state.links.link(n, current);
        improved(n, candidate);
    }
}

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        Algorithm::Dijkstra.name()
    }

}

impl Search for DijkstraSolver {
    fn search(&self, grid: &GridSnapshot, start: usize, end: usize) -> SearchResult {
        match self.selection {
            Selection::Heap => self.search_heap(grid, start, end),
            Selection::Scan => self.search_scan(grid, start, end),
        }
    }
}
