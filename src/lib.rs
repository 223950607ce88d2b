//! # grid_search
//!
//! Runs [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! breadth-first and depth-first search over the same 4-connected grid so their
//! behaviour can be compared side by side. Every run reports the order in which
//! cells were finalized together with the path it found, which is what a
//! visualizer replays over time.
//!
//! Each run allocates its own working state and only reads the [GridSnapshot], so
//! several runs over one snapshot can execute at the same time without locking.
//! Movement is orthogonal and every step costs 1.
//!
//! ```
//! use grid_search::{Algorithm, Board};
//!
//! let board: Board = "S.#\n..#\n..E".parse().unwrap();
//! let grid = board.snapshot();
//! let result = Algorithm::Bfs.run(&grid, board.start(), board.end()).unwrap();
//! assert_eq!(result.path.len(), 5);
//! ```
pub mod board;
pub mod compare;
pub mod error;
mod frontier;
pub mod grid;
pub mod solver;
mod state;

pub use board::{Board, BoardConfig, Cell};
pub use compare::{compare, compare_parallel, Comparison};
pub use error::{CoordinateFault, Result, SearchError};
pub use grid::{Components, Coord, GridSnapshot};
pub use solver::{
    astar::AstarSolver,
    bfs::BfsSolver,
    dfs::DfsSolver,
    dijkstra::{DijkstraSolver, Selection},
    Algorithm, GridSolver, GridStats, SearchResult,
};

/// Integer cost type used for distances and scores. Every move costs [STEP_COST].
pub type Cost = u32;

/// Cost of a single orthogonal move.
pub const STEP_COST: Cost = 1;

/// Number of rows of a freshly created board.
pub const DEFAULT_ROWS: usize = 21;
/// Number of columns of a freshly created board.
pub const DEFAULT_COLS: usize = 35;
/// Start cell of a freshly created board.
pub const DEFAULT_START: Coord = Coord::new(10, 5);
/// End cell of a freshly created board.
pub const DEFAULT_END: Coord = Coord::new(10, 29);
