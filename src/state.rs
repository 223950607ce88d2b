//! Per-run working state. Every run allocates its own state sized to the grid and
//! drops it when the run returns, so nothing search-related is ever written to the
//! [GridSnapshot] itself. Each algorithm gets a state type with exactly the fields
//! it uses.
use num_traits::{Bounded, Zero};

use crate::grid::{Coord, GridSnapshot};
use crate::Cost;

const NO_PARENT: usize = usize::MAX;

/// Predecessor links by flat cell index.
#[derive(Clone, Debug)]
pub(crate) struct Links {
    parent: Vec<usize>,
}

impl Links {
    pub(crate) fn new(len: usize) -> Links {
        Links {
            parent: vec![NO_PARENT; len],
        }
    }
    pub(crate) fn link(&mut self, ix: usize, parent: usize) {
        self.parent[ix] = parent;
    }
    pub(crate) fn parent(&self, ix: usize) -> Option<usize> {
        match self.parent[ix] {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    /// Follows predecessor links back from `end` and returns the path in start-to-end
    /// order. Empty if the chain does not lead back to `start`.
    pub(crate) fn path_to(&self, grid: &GridSnapshot, start: usize, end: usize) -> Vec<Coord> {
        let mut chain: Vec<usize> = std::iter::successors(Some(end), |&ix| {
            if ix == start {
                None
            } else {
                self.parent(ix)
            }
        })
        .take(grid.len())
        .collect();
        if chain.last() != Some(&start) {
            return Vec::new();
        }
        chain.reverse();
        chain.into_iter().map(|ix| grid.coord(ix)).collect()
    }
}

/// One flag per cell: visited, enqueued, and so on.
#[derive(Clone, Debug)]
pub(crate) struct Marks {
    marks: Vec<bool>,
}

impl Marks {
    pub(crate) fn new(len: usize) -> Marks {
        Marks {
            marks: vec![false; len],
        }
    }
    pub(crate) fn is_marked(&self, ix: usize) -> bool {
        self.marks[ix]
    }
    /// Sets the flag, returning [false] if it was already set.
    pub(crate) fn mark(&mut self, ix: usize) -> bool {
        !std::mem::replace(&mut self.marks[ix], true)
    }
}

/// Per-cell score where the largest value of `C` stands for "not reached yet".
#[derive(Clone, Debug)]
pub(crate) struct ScoreMap<C> {
    scores: Vec<C>,
}

impl<C: Bounded + Zero + Copy + PartialEq> ScoreMap<C> {
    /// All cells unreached except `origin`, which scores zero.
    pub(crate) fn new(len: usize, origin: usize) -> ScoreMap<C> {
        let mut scores = vec![C::max_value(); len];
        scores[origin] = C::zero();
        ScoreMap { scores }
    }
    pub(crate) fn get(&self, ix: usize) -> C {
        self.scores[ix]
    }
    pub(crate) fn set(&mut self, ix: usize, score: C) {
        self.scores[ix] = score;
    }
    pub(crate) fn is_reached(&self, ix: usize) -> bool {
        self.scores[ix] != C::max_value()
    }
}

/// g, h and f = g + h of a single cell. The frontier is keyed by `f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AstarScore {
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
}

impl AstarScore {
    const UNREACHED: AstarScore = AstarScore {
        g: Cost::MAX,
        h: 0,
        f: Cost::MAX,
    };
}

#[derive(Clone, Debug)]
pub(crate) struct AstarState {
    scores: Vec<AstarScore>,
    pub(crate) visited: Marks,
    pub(crate) links: Links,
}

impl AstarState {
    pub(crate) fn new(len: usize) -> AstarState {
        AstarState {
            scores: vec![AstarScore::UNREACHED; len],
            visited: Marks::new(len),
            links: Links::new(len),
        }
    }
    pub(crate) fn score(&self, ix: usize) -> AstarScore {
        self.scores[ix]
    }
    /// Records a new g and h for the cell and returns its f.
    pub(crate) fn set_score(&mut self, ix: usize, g: Cost, h: Cost) -> Cost {
        let f = g + h;
        self.scores[ix] = AstarScore { g, h, f };
        f
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DijkstraState {
    pub(crate) distance: ScoreMap<Cost>,
    pub(crate) visited: Marks,
    pub(crate) links: Links,
}

impl DijkstraState {
    pub(crate) fn new(len: usize, start: usize) -> DijkstraState {
        DijkstraState {
            distance: ScoreMap::new(len, start),
            visited: Marks::new(len),
            links: Links::new(len),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct BfsState {
    pub(crate) enqueued: Marks,
    pub(crate) links: Links,
}

impl BfsState {
    pub(crate) fn new(len: usize) -> BfsState {
        BfsState {
            enqueued: Marks::new(len),
            links: Links::new(len),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DfsState {
    pub(crate) visited: Marks,
    pub(crate) links: Links,
}

impl DfsState {
    pub(crate) fn new(len: usize) -> DfsState {
        DfsState {
            visited: Marks::new(len),
            links: Links::new(len),
        }
    }
}
