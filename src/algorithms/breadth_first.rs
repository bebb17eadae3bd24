use std::collections::VecDeque;

use crate::algorithms::common::Frontier;
use crate::grid::Position;
use crate::node::{NodeId, SearchNode};

/// Strict FIFO frontier.
///
/// Nodes leave in the order they were discovered, so every node is expanded
/// at its minimal hop distance and the first arrival at the target is a
/// shortest path.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        FifoFrontier::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &mut SearchNode, _target: Position) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn stops_on_first_goal(&self) -> bool {
        true
    }

    fn relaxes(&self) -> bool {
        false
    }
}
