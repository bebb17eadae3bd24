use std::fmt;
use std::str::FromStr;

use crate::grid::Position;
use crate::node::{NodeId, SearchNode};

/// Scheduling policy for the nodes a search has discovered but not expanded.
///
/// The frontier never owns nodes; it only orders the ids handed to it.
pub trait Frontier {
    /// Queues `id` for expansion. Policies that rank by proximity assign the
    /// node's score here.
    fn push(&mut self, id: NodeId, node: &mut SearchNode, target: Position);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the first time the target is reached is already the best
    /// answer this policy can give.
    fn stops_on_first_goal(&self) -> bool;

    /// Whether a visited cell may be taken over by a node reached through a
    /// strictly shorter path.
    fn relaxes(&self) -> bool;
}

/// Frontier policy used for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO queue. Stops at the first arrival on the target, which is a
    /// shortest path.
    #[default]
    BreadthFirst,
    /// Heap ordered by closeness to the target. Reaches the target early on
    /// open maps, then keeps relaxing cells until no queued node can beat the
    /// best length found, so it may expand the same cell more than once.
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::BestFirst];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::BestFirst => "best_first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}', expected 'breadth_first' or 'best_first'")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" | "bfs" => Ok(Strategy::BreadthFirst),
            "best_first" | "greedy" => Ok(Strategy::BestFirst),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
