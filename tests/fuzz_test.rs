//! Fuzzes the searches on many small random grids. Every result is checked against an
//! independent flood fill: paths must be valid, BFS, Dijkstra and A* must find shortest
//! paths, DFS must find some path exactly when one exists, and an unreachable end must
//! leave the whole component of the start visited.
use grid_search::{
    Algorithm, Coord, DijkstraSolver, GridSnapshot, GridSolver, SearchResult, Selection,
};
use rand::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

fn random_problem(max_side: usize, rng: &mut StdRng) -> (GridSnapshot, Coord, Coord) {
    let rows = rng.gen_range(1..=max_side);
    let cols = rng.gen_range(1..=max_side);
    let mut walls: Vec<Vec<bool>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(0.35)).collect())
        .collect();
    let start = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let end = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    walls[start.row][start.col] = false;
    walls[end.row][end.col] = false;
    (GridSnapshot::from_rows(&walls).unwrap(), start, end)
}

/// Plain flood fill from `start`, returning the number of cells on a shortest path to
/// every reachable cell.
fn flood_fill(grid: &GridSnapshot, start: Coord) -> HashMap<Coord, usize> {
    let mut cells = HashMap::new();
    let mut queue = VecDeque::new();
    cells.insert(start, 1);
    queue.push_back(start);
    while let Some(c) = queue.pop_front() {
        let d = cells[&c];
        let candidates = [
            c.row.checked_sub(1).map(|r| Coord::new(r, c.col)),
            Some(Coord::new(c.row + 1, c.col)),
            c.col.checked_sub(1).map(|col| Coord::new(c.row, col)),
            Some(Coord::new(c.row, c.col + 1)),
        ];
        for n in candidates.into_iter().flatten() {
            if grid.can_move_to(n) && !cells.contains_key(&n) {
                cells.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    cells
}

fn visualize_grid(grid: &GridSnapshot, start: &Coord, end: &Coord) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("E");
            } else if grid.is_wall(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn check(
    algorithm: Algorithm,
    result: &SearchResult,
    grid: &GridSnapshot,
    start: Coord,
    end: Coord,
    reachable: &HashMap<Coord, usize>,
) -> bool {
    let visited: HashSet<Coord> = result.visited_order.iter().copied().collect();
    if visited.len() != result.visited_order.len() || visited.len() > grid.len() {
        return false;
    }
    if result.visited_order.first() != Some(&start) || !result.path_is_valid(grid, start, end) {
        return false;
    }
    match reachable.get(&end) {
        Some(&shortest) => {
            let length_ok = if algorithm.is_optimal() {
                result.path.len() == shortest
            } else {
                result.path.len() >= shortest
            };
            length_ok && result.visited_order.last() == Some(&end)
        }
        None => {
            result.path.is_empty()
                && visited == reachable.keys().copied().collect::<HashSet<Coord>>()
        }
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let (grid, start, end) = random_problem(N, &mut rng);
        let reachable = flood_fill(&grid, start);
        assert_eq!(
            grid.components().reachable(start, end),
            reachable.contains_key(&end)
        );
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&grid, start, end).unwrap();
            let ok = check(algorithm, &result, &grid, start, end, &reachable);
            // Show the grid if a check fails
            if !ok {
                println!("{algorithm} failed: {result:?}");
                visualize_grid(&grid, &start, &end);
            }
            assert!(ok);
        }
    }
}

#[test]
fn fuzz_dijkstra_selection() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let heap = DijkstraSolver::new(Selection::Heap);
    let scan = DijkstraSolver::new(Selection::Scan);
    for _ in 0..N_GRIDS {
        let (grid, start, end) = random_problem(N, &mut rng);
        let heap_result = heap.run(&grid, start, end).unwrap();
        let scan_result = scan.run(&grid, start, end).unwrap();
        if heap_result != scan_result {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(heap_result, scan_result);
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 10;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let (grid, start, end) = random_problem(N, &mut rng);
        for algorithm in Algorithm::ALL {
            let first = algorithm.run(&grid, start, end).unwrap();
            let second = algorithm.run(&grid.clone(), start, end).unwrap();
            assert_eq!(first, second);
        }
    }
}
