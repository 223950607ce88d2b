//! Error types for grid construction and search input validation.

use core::fmt;
use thiserror::Error;

use crate::grid::Coord;

/// Why a coordinate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateFault {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate is a wall.
    Wall,
    /// The coordinate is already taken by the other endpoint.
    Occupied,
}

impl fmt::Display for CoordinateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateFault::OutOfBounds => write!(f, "out of bounds"),
            CoordinateFault::Wall => write!(f, "cell is a wall"),
            CoordinateFault::Occupied => write!(f, "cell holds the other endpoint"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid coordinate {coord}: {fault}")]
    InvalidCoordinate { coord: Coord, fault: CoordinateFault },

    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

impl SearchError {
    pub(crate) fn invalid(coord: Coord, fault: CoordinateFault) -> SearchError {
        SearchError::InvalidCoordinate { coord, fault }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
