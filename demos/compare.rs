use grid_search::{compare, Algorithm, Board, Coord};

// In this example all four algorithms search the default 21x35 board after a wall
// has been drawn down column 17, leaving a single gap in the bottom row. The start
// sits left of the wall and the end right of it.
//
// The printed counters are the ones a visualizer shows next to each panel.
fn main() {
    let mut board = Board::default();
    for row in 0..board.rows() - 1 {
        board.set_wall(Coord::new(row, 17), true).unwrap();
    }
    println!("{}", board);

    let grid = board.snapshot();
    let comparison = compare(&grid, board.start(), board.end(), &Algorithm::ALL).unwrap();
    for (algorithm, result) in comparison.iter() {
        let stats = result.stats();
        println!(
            "{:<9} visited {:>3} cells, path of {:>2} cells  ({})",
            algorithm.name(),
            stats.visited_nodes,
            stats.path_length,
            algorithm.description()
        );
    }
}
