//! Editable board: walls plus one start and one end cell. Edits happen between runs;
//! [Board::snapshot] hands the searches an immutable copy.
use core::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{CoordinateFault, Result, SearchError};
use crate::grid::{Coord, GridSnapshot};
use crate::{DEFAULT_COLS, DEFAULT_END, DEFAULT_ROWS, DEFAULT_START};

/// Size and initial endpoints of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl BoardConfig {
    fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SearchError::MalformedGrid(format!(
                "board must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        for endpoint in [self.start, self.end] {
            if endpoint.row >= self.rows || endpoint.col >= self.cols {
                return Err(SearchError::invalid(endpoint, CoordinateFault::OutOfBounds));
            }
        }
        if self.start == self.end {
            return Err(SearchError::invalid(self.end, CoordinateFault::Occupied));
        }
        Ok(())
    }
}

/// Read-only view of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
}

/// A board being edited. The start and end cell are never walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    walls: Vec<bool>,
    start: Coord,
    end: Coord,
}

impl Default for Board {
    fn default() -> Board {
        let config = BoardConfig::default();
        Board {
            walls: vec![false; config.rows * config.cols],
            start: config.start,
            end: config.end,
            config,
        }
    }
}

impl Board {
    /// An open board with the configured size and endpoints.
    pub fn new(config: BoardConfig) -> Result<Board> {
        config.validate()?;
        Ok(Board {
            walls: vec![false; config.rows * config.cols],
            start: config.start,
            end: config.end,
            config,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
    pub fn rows(&self) -> usize {
        self.config.rows
    }
    pub fn cols(&self) -> usize {
        self.config.cols
    }
    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn end(&self) -> Coord {
        self.end
    }
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    fn index(&self, coord: Coord) -> Result<usize> {
        if coord.row < self.rows() && coord.col < self.cols() {
            Ok(coord.row * self.cols() + coord.col)
        } else {
            Err(SearchError::invalid(coord, CoordinateFault::OutOfBounds))
        }
    }

    /// The cell at `coord`, [None] if it lies off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let ix = self.index(coord).ok()?;
        Some(Cell {
            coord,
            is_wall: self.walls[ix],
            is_start: coord == self.start,
            is_end: coord == self.end,
        })
    }

    pub fn is_wall(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.is_wall)
    }

    /// Places or removes a wall. Requests to wall the start or end cell are ignored.
    /// Returns whether the board changed.
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<bool> {
        let ix = self.index(coord)?;
        if wall && (coord == self.start || coord == self.end) {
            debug!("Ignoring wall on endpoint {}", coord);
            return Ok(false);
        }
        let changed = self.walls[ix] != wall;
        self.walls[ix] = wall;
        Ok(changed)
    }

    /// Flips the wall flag of a cell and returns the new flag. The start and end
    /// cell stay open.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool> {
        let ix = self.index(coord)?;
        self.set_wall(coord, !self.walls[ix])?;
        Ok(self.walls[ix])
    }

    /// Moves the start cell, clearing any wall on its new position.
    pub fn move_start(&mut self, coord: Coord) -> Result<()> {
        let ix = self.index(coord)?;
        if coord == self.end {
            return Err(SearchError::invalid(coord, CoordinateFault::Occupied));
        }
        self.walls[ix] = false;
        self.start = coord;
        Ok(())
    }

    /// Moves the end cell, clearing any wall on its new position.
    pub fn move_end(&mut self, coord: Coord) -> Result<()> {
        let ix = self.index(coord)?;
        if coord == self.start {
            return Err(SearchError::invalid(coord, CoordinateFault::Occupied));
        }
        self.walls[ix] = false;
        self.end = coord;
        Ok(())
    }

    /// Removes every wall, keeping the endpoints where they are.
    pub fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    /// Back to an open board with the configured endpoints.
    pub fn reset(&mut self) {
        self.clear_walls();
        self.start = self.config.start;
        self.end = self.config.end;
    }

    /// Immutable copy of the current walls for a search run.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_parts(self.rows(), self.cols(), self.walls.clone())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line: String = (0..self.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    if coord == self.start {
                        'S'
                    } else if coord == self.end {
                        'E'
                    } else if self.walls[row * self.cols() + col] {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = SearchError;

    /// Parses rows of `.` (open), `#` (wall), `S` (start) and `E` (end). Blank lines
    /// and surrounding whitespace are ignored. The parsed endpoints become the
    /// board's configured endpoints.
    fn from_str(s: &str) -> Result<Board> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let mut walls = Vec::with_capacity(lines.len() * cols);
        let mut start = None;
        let mut end = None;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SearchError::MalformedGrid(format!(
                    "row {row} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let coord = Coord::new(row, col);
                let endpoint = match ch {
                    '.' | '#' => None,
                    'S' => Some(("start", &mut start)),
                    'E' => Some(("end", &mut end)),
                    _ => {
                        return Err(SearchError::MalformedGrid(format!(
                            "unexpected '{ch}' at {coord}"
                        )))
                    }
                };
                if let Some((role, slot)) = endpoint {
                    if slot.replace(coord).is_some() {
                        return Err(SearchError::MalformedGrid(format!(
                            "more than one {role} cell"
                        )));
                    }
                }
                walls.push(ch == '#');
            }
        }
        let missing = |role: &str| SearchError::MalformedGrid(format!("no {role} cell"));
        let config = BoardConfig {
            rows: lines.len(),
            cols,
            start: start.ok_or_else(|| missing("start"))?,
            end: end.ok_or_else(|| missing("end"))?,
        };
        config.validate()?;
        Ok(Board {
            config,
            walls,
            start: config.start,
            end: config.end,
        })
    }
}
