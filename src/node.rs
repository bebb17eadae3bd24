use crate::grid::Position;

/// Score given to a node sitting exactly on the target.
pub const ON_TARGET_SCORE: f64 = f64::MAX;

/// Stable handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One visited cell of a single query.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub position: Position,
    pub distance: i32,
    pub parent: Option<NodeId>,
    pub score: f64,
}

impl SearchNode {
    /// The start node sits at distance 0 and has no parent.
    pub fn start(position: Position) -> Self {
        SearchNode {
            position,
            distance: 0,
            parent: None,
            score: 0.0,
        }
    }

    /// Proximity score towards `target`; higher means closer.
    pub fn score_towards(&mut self, target: Position) {
        let squared = self.position.squared_distance(target);
        self.score = if squared == 0 {
            ON_TARGET_SCORE
        } else {
            1.0 / squared as f64
        };
    }
}

/// Owns every node created during one query.
///
/// Parents are stored as [`NodeId`]s, so the whole tree is released when the
/// arena is dropped.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds a node one step further from the start than `parent`.
    pub fn push_child(&mut self, parent: NodeId, position: Position) -> NodeId {
        let distance = self[parent].distance + 1;
        self.push(SearchNode {
            position,
            distance,
            parent: Some(parent),
            score: 0.0,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks from `id` back to the start node, `id` first.
    pub fn chain(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(&self[id]), move |node| node.parent.map(|p| &self[p]))
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }
}

/// Dense per-cell record of which node, if any, currently owns a cell.
#[derive(Debug)]
pub struct VisitedIndex {
    seen: Vec<bool>,
    owners: Vec<Option<NodeId>>,
}

impl VisitedIndex {
    pub fn new(cells: usize) -> Self {
        VisitedIndex {
            seen: vec![false; cells],
            owners: vec![None; cells],
        }
    }

    pub fn is_seen(&self, cell: usize) -> bool {
        self.seen[cell]
    }

    pub fn owner(&self, cell: usize) -> Option<NodeId> {
        self.owners[cell]
    }

    /// Makes `id` the owner of `cell`, returning the node it displaced.
    pub fn claim(&mut self, cell: usize, id: NodeId) -> Option<NodeId> {
        self.seen[cell] = true;
        self.owners[cell].replace(id)
    }
}
