//! Frontier containers: the pop/push discipline that distinguishes the four
//! algorithms. The shared expansion routine in [engine](crate::engine) is
//! parameterized over a [Frontier] plus a priority function, so each
//! algorithm is a container choice rather than a separate search loop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::cell::Coord;

/// An entry handed between the expansion routine and a frontier container:
/// the discovered coordinate, its index in the parent map and its
/// depth-from-start.
#[derive(Clone, Copy, Debug)]
pub struct FrontierNode<C> {
    pub coord: Coord,
    pub index: usize,
    pub depth: C,
}

/// A container of discovered-but-not-yet-expanded cells.
///
/// The priority argument is meaningful only to [BestFirstFrontier]; the
/// stack and queue disciplines ignore it.
pub trait Frontier<C> {
    fn push(&mut self, node: FrontierNode<C>, priority: C);
    fn pop(&mut self) -> Option<FrontierNode<C>>;
    fn is_empty(&self) -> bool;
}

/// Last-in-first-out discipline: depth-first search.
#[derive(Clone, Debug)]
pub struct LifoFrontier<C> {
    entries: Vec<FrontierNode<C>>,
}

impl<C> Default for LifoFrontier<C> {
    fn default() -> Self {
        LifoFrontier {
            entries: Vec::new(),
        }
    }
}

impl<C> Frontier<C> for LifoFrontier<C> {
    fn push(&mut self, node: FrontierNode<C>, _priority: C) {
        self.entries.push(node);
    }

    fn pop(&mut self) -> Option<FrontierNode<C>> {
        self.entries.pop()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First-in-first-out discipline: breadth-first search, equivalent to
/// Dijkstra on a unit-cost grid.
#[derive(Clone, Debug)]
pub struct FifoFrontier<C> {
    entries: VecDeque<FrontierNode<C>>,
}

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        FifoFrontier {
            entries: VecDeque::new(),
        }
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, node: FrontierNode<C>, _priority: C) {
        self.entries.push_back(node);
    }

    fn pop(&mut self) -> Option<FrontierNode<C>> {
        self.entries.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct SmallestPriorityHolder<C> {
    priority: C,
    node: FrontierNode<C>,
}

impl<C: PartialEq> PartialEq for SmallestPriorityHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.node.coord.eq(&other.node.coord)
    }
}

impl<C: PartialEq> Eq for SmallestPriorityHolder<C> {}

impl<C: Ord> PartialOrd for SmallestPriorityHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestPriorityHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed: the
        // smallest priority is popped first, with ties broken by ascending
        // (col, row) coordinate order for deterministic exploration.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.node.coord.cmp(&self.node.coord),
            s => s,
        }
    }
}

/// Priority-queue discipline: greedy best-first and A*, with the priority
/// supplied by the algorithm's priority function.
pub struct BestFirstFrontier<C: Ord> {
    heap: BinaryHeap<SmallestPriorityHolder<C>>,
}

impl<C: Ord> Default for BestFirstFrontier<C> {
    fn default() -> Self {
        BestFirstFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl<C: Ord> Frontier<C> for BestFirstFrontier<C> {
    fn push(&mut self, node: FrontierNode<C>, priority: C) {
        self.heap.push(SmallestPriorityHolder { priority, node });
    }

    fn pop(&mut self) -> Option<FrontierNode<C>> {
        self.heap.pop().map(|holder| holder.node)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(col: i32, row: i32) -> FrontierNode<i32> {
        FrontierNode {
            coord: Coord::new(col, row),
            index: 0,
            depth: 0,
        }
    }

    #[test]
    fn lifo_pops_most_recent() {
        let mut frontier = LifoFrontier::default();
        frontier.push(node(0, 0), 0);
        frontier.push(node(1, 0), 0);
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(1, 0));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(0, 0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn fifo_pops_oldest() {
        let mut frontier = FifoFrontier::default();
        frontier.push(node(0, 0), 0);
        frontier.push(node(1, 0), 0);
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(0, 0));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(1, 0));
    }

    #[test]
    fn best_first_pops_smallest_priority() {
        let mut frontier = BestFirstFrontier::default();
        frontier.push(node(0, 0), 3);
        frontier.push(node(5, 5), 1);
        frontier.push(node(2, 2), 2);
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(5, 5));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(2, 2));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(0, 0));
    }

    #[test]
    fn best_first_breaks_ties_by_coordinate() {
        let mut frontier = BestFirstFrontier::default();
        frontier.push(node(1, 0), 7);
        frontier.push(node(0, 2), 7);
        frontier.push(node(0, 1), 7);
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(0, 1));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(0, 2));
        assert_eq!(frontier.pop().unwrap().coord, Coord::new(1, 0));
    }
}
