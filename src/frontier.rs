//! Min-priority frontier used by A* and Dijkstra. A variant of the cost holder in
//! [pathfinding's astar](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with an explicit order between entries of equal cost, so that runs are reproducible.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How entries with equal cost are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TieBreak {
    /// First pushed, first popped.
    Insertion,
    /// Lowest cell index (grid scan order) first.
    Index,
}

#[derive(Clone, Copy, Debug)]
struct SmallestCostHolder<K> {
    cost: K,
    tie: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.tie == other.tie
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.tie.cmp(&self.tie),
            s => s,
        }
    }
}

/// Binary heap of cell indices keyed by cost. Stale entries are not removed; callers
/// discard them on pop.
#[derive(Clone, Debug)]
pub(crate) struct MinFrontier<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    tie_break: TieBreak,
    pushed: usize,
}

impl<K: Ord + Copy> MinFrontier<K> {
    pub(crate) fn new(tie_break: TieBreak) -> MinFrontier<K> {
        MinFrontier {
            heap: BinaryHeap::new(),
            tie_break,
            pushed: 0,
        }
    }

    pub(crate) fn push(&mut self, index: usize, cost: K) {
        let tie = match self.tie_break {
            TieBreak::Insertion => self.pushed,
            TieBreak::Index => index,
        };
        self.pushed += 1;
        self.heap.push(SmallestCostHolder { cost, tie, index });
    }

    /// Removes the cheapest entry, returning its index and the cost it was pushed with.
    pub(crate) fn pop(&mut self) -> Option<(usize, K)> {
        self.heap.pop().map(|h| (h.index, h.cost))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_cost_first() {
        let mut frontier = MinFrontier::new(TieBreak::Insertion);
        frontier.push(0, 5u32);
        frontier.push(1, 2);
        frontier.push(2, 9);
        assert_eq!(frontier.pop(), Some((1, 2)));
        assert_eq!(frontier.pop(), Some((0, 5)));
        assert_eq!(frontier.pop(), Some((2, 9)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut frontier = MinFrontier::new(TieBreak::Insertion);
        for ix in [7, 3, 9, 1] {
            frontier.push(ix, 4u32);
        }
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|(ix, _)| ix)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn equal_costs_pop_in_index_order() {
        let mut frontier = MinFrontier::new(TieBreak::Index);
        for ix in [7, 3, 9, 1] {
            frontier.push(ix, 4u32);
        }
        frontier.push(8, 3);
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|(ix, _)| ix)).collect();
        assert_eq!(order, vec![8, 1, 3, 7, 9]);
    }

    /// Duplicate entries for one index are kept until popped.
    #[test]
    fn keeps_stale_entries() {
        let mut frontier = MinFrontier::new(TieBreak::Insertion);
        frontier.push(4, 6u32);
        frontier.push(4, 3);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((4, 3)));
        assert_eq!(frontier.pop(), Some((4, 6)));
    }
}
