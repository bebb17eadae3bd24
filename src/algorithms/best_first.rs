use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithms::common::Frontier;
use crate::grid::Position;
use crate::node::{NodeId, SearchNode};

/// Heap entry. Higher score pops first; equal scores pop in discovery order.
#[derive(Debug, Clone, Copy)]
struct Entry {
    score: f64,
    seq: u64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower sequence numbers win ties, so compare them reversed.
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Greedy frontier ordered by inverse squared distance to the target.
///
/// Pairs with the relaxation visited model: a cell reached again through a
/// shorter path gets a fresh node, and the search keeps running after the
/// first goal hit until nothing queued can beat it.
#[derive(Debug, Default)]
pub struct ScoredFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ScoredFrontier {
    pub fn new() -> Self {
        ScoredFrontier::default()
    }
}

impl Frontier for ScoredFrontier {
    fn push(&mut self, id: NodeId, node: &mut SearchNode, target: Position) {
        node.score_towards(target);
        self.heap.push(Entry {
            score: node.score,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn stops_on_first_goal(&self) -> bool {
        false
    }

    fn relaxes(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;

    #[test]
    fn closest_node_pops_first_and_ties_keep_order() {
        let target = Position::new(4, 0);
        let mut arena = NodeArena::default();
        let mut frontier = ScoredFrontier::new();

        let far = arena.push(SearchNode::start(Position::new(0, 0)));
        let tie_a = arena.push(SearchNode::start(Position::new(3, 1)));
        let tie_b = arena.push(SearchNode::start(Position::new(5, 1)));
        let on = arena.push(SearchNode::start(target));
        for id in [far, tie_a, tie_b, on] {
            frontier.push(id, &mut arena[id], target);
        }

        assert_eq!(arena[tie_a].score, 0.5);
        assert_eq!(frontier.pop(), Some(on));
        assert_eq!(frontier.pop(), Some(tie_a));
        assert_eq!(frontier.pop(), Some(tie_b));
        assert_eq!(frontier.pop(), Some(far));
        assert_eq!(frontier.pop(), None);
    }
}
