use core::fmt;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;

use crate::error::{CoordinateFault, Result, SearchError};

/// A cell position. Rows grow downwards and columns grow to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    /// True if the two coordinates are one orthogonal step apart.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

/// Immutable rectangular board of wall flags, stored row-major so that cell
/// `(row, col)` lives at index `row * cols + col`. Searches only ever read it;
/// edits happen on a [Board](crate::Board) between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

impl GridSnapshot {
    /// A grid without walls.
    pub fn open(rows: usize, cols: usize) -> Result<GridSnapshot> {
        if rows == 0 || cols == 0 {
            return Err(SearchError::MalformedGrid(format!(
                "grid must have at least one cell, got {rows}x{cols}"
            )));
        }
        Ok(GridSnapshot::from_parts(rows, cols, vec![false; rows * cols]))
    }

    /// Builds a grid with the given wall positions.
    pub fn from_walls<I>(rows: usize, cols: usize, walls: I) -> Result<GridSnapshot>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = GridSnapshot::open(rows, cols)?;
        for wall in walls {
            if !grid.in_bounds(wall) {
                return Err(SearchError::invalid(wall, CoordinateFault::OutOfBounds));
            }
            let ix = grid.index(wall);
            grid.walls[ix] = true;
        }
        Ok(grid)
    }

    /// Builds a grid from rows of wall flags. Every row must have the same, non-zero
    /// length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<GridSnapshot> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != cols)
        {
            return Err(SearchError::MalformedGrid(format!(
                "row {row} has {} cells, expected {cols}",
                r.as_ref().len()
            )));
        }
        let mut grid = GridSnapshot::open(rows.len(), cols)?;
        grid.walls = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Ok(grid)
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, walls: Vec<bool>) -> GridSnapshot {
        debug_assert_eq!(walls.len(), rows * cols);
        GridSnapshot { rows, cols, walls }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.walls.len()
    }
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }
    /// Out-of-bounds coordinates count as walls.
    pub fn is_wall(&self, coord: Coord) -> bool {
        !self.in_bounds(coord) || self.walls[self.index(coord)]
    }
    pub fn can_move_to(&self, coord: Coord) -> bool {
        !self.is_wall(coord)
    }

    /// Flat index of an in-bounds coordinate.
    pub fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.row * self.cols + coord.col
    }
    pub fn coord(&self, ix: usize) -> Coord {
        Coord::new(ix / self.cols, ix % self.cols)
    }

    /// Flat index of a search endpoint, rejecting coordinates off the grid or on a wall.
    pub fn endpoint_index(&self, coord: Coord) -> Result<usize> {
        if !self.in_bounds(coord) {
            warn!("{} lies outside the {}x{} grid", coord, self.rows, self.cols);
            return Err(SearchError::invalid(coord, CoordinateFault::OutOfBounds));
        }
        let ix = self.index(coord);
        if self.walls[ix] {
            warn!("{} is a wall and cannot be a search endpoint", coord);
            return Err(SearchError::invalid(coord, CoordinateFault::Wall));
        }
        Ok(ix)
    }

    /// Open orthogonal neighbours of the cell at `ix`, always in the order
    /// up, down, left, right. Search tie-breaking depends on this order.
    pub(crate) fn neighbours(&self, ix: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = (ix / self.cols, ix % self.cols);
        [
            (row > 0).then(|| ix - self.cols),
            (row + 1 < self.rows).then(|| ix + self.cols),
            (col > 0).then(|| ix - 1),
            (col + 1 < self.cols).then(|| ix + 1),
        ]
        .into_iter()
        .flatten()
        .filter(move |&n| !self.walls[n])
    }

    /// Open orthogonal neighbours of `coord` in the order up, down, left, right.
    /// Empty for coordinates outside the grid.
    pub fn open_neighbours(&self, coord: Coord) -> Vec<Coord> {
        if !self.in_bounds(coord) {
            return Vec::new();
        }
        self.neighbours(self.index(coord))
            .map(|ix| self.coord(ix))
            .collect()
    }

    /// Labels the 4-connected open regions of the grid.
    pub fn components(&self) -> Components<'_> {
        debug!("Generating connected components");
        let mut sets = UnionFind::new(self.len());
        for ix in 0..self.len() {
            if self.walls[ix] {
                continue;
            }
            let Coord { row, col } = self.coord(ix);
            // Linking down and right covers every edge once.
            if row + 1 < self.rows && !self.walls[ix + self.cols] {
                sets.union(ix, ix + self.cols);
            }
            if col + 1 < self.cols && !self.walls[ix + 1] {
                sets.union(ix, ix + 1);
            }
        }
        Components { grid: self, sets }
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.walls.chunks(self.cols) {
            let line: String = row.iter().map(|&w| if w { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Connected open regions of a [GridSnapshot], backed by a [UnionFind].
#[derive(Clone, Debug)]
pub struct Components<'a> {
    grid: &'a GridSnapshot,
    sets: UnionFind<usize>,
}

impl Components<'_> {
    /// Component id of an open cell, [None] for walls and coordinates off the grid.
    pub fn component(&self, coord: Coord) -> Option<usize> {
        self.grid
            .can_move_to(coord)
            .then(|| self.sets.find(self.grid.index(coord)))
    }
    /// Checks if a path between the two cells exists.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        match (self.component(a), self.component(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
    /// Number of cells in the component containing `coord`, 0 for walls.
    pub fn size(&self, coord: Coord) -> usize {
        match self.component(coord) {
            Some(id) => (0..self.grid.len())
                .filter(|&ix| !self.grid.walls[ix] && self.sets.find(ix) == id)
                .count(),
            None => 0,
        }
    }
}
