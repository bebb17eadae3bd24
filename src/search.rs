use tracing::{debug, trace};

use crate::algorithms::{FifoFrontier, Frontier, ScoredFrontier, Strategy};
use crate::error::Rejection;
use crate::grid::{Direction, Grid, Position};
use crate::node::{NodeArena, NodeId, SearchNode, VisitedIndex};
use crate::statistics::SearchStats;
use crate::NO_PATH_EXISTS;

/// One pathfinding request over a caller-owned grid.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub start: Position,
    pub target: Position,
    pub cells: &'a [u8],
    pub width: i32,
    pub height: i32,
}

/// Terminal state of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path of `steps` moves was written to the output buffer.
    Found { steps: i32 },
    /// The search ran out of nodes worth expanding.
    Exhausted,
    /// Refused before searching.
    Rejected(Rejection),
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Step count, or [`NO_PATH_EXISTS`] when nothing was found.
    pub fn step_count(&self) -> i32 {
        match self.outcome {
            SearchOutcome::Found { steps } => steps,
            _ => NO_PATH_EXISTS,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }
}

/// Grid search engine. Holds no per-query state, so one value can serve any
/// number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pathfinder {
    strategy: Strategy,
}

impl Pathfinder {
    pub fn new(strategy: Strategy) -> Self {
        Pathfinder { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs `query`, writing the path into `out`.
    ///
    /// `out.len()` is the capacity: it caps both the reportable path length
    /// and how deep the search goes. On success `out[..steps]` holds the
    /// linear indices of the path from the cell next to the start up to the
    /// target. Slots past `steps` are left untouched.
    pub fn search(&self, query: &Query<'_>, out: &mut [i32]) -> SearchReport {
        let mut stats = SearchStats::default();
        let outcome = match check_query(query, out.len()) {
            Err(rejection) => {
                debug!(strategy = %self.strategy, %rejection, "query rejected");
                SearchOutcome::Rejected(rejection)
            }
            Ok(None) => SearchOutcome::Found { steps: 0 },
            Ok(Some(grid)) => match self.strategy {
                Strategy::BreadthFirst => drive(&grid, query, out, FifoFrontier::new(), &mut stats),
                Strategy::BestFirst => drive(&grid, query, out, ScoredFrontier::new(), &mut stats),
            },
        };

        debug!(
            strategy = %self.strategy,
            start = ?query.start,
            target = ?query.target,
            capacity = out.len(),
            ?outcome,
            nodes_created = stats.nodes_created,
            nodes_expanded = stats.nodes_expanded,
            relaxations = stats.relaxations,
            "search finished"
        );

        SearchReport {
            strategy: self.strategy,
            outcome,
            stats,
        }
    }
}

/// Pre-search checks. `Ok(None)` means start and target coincide and there
/// is nothing to search.
fn check_query<'a>(query: &Query<'a>, capacity: usize) -> Result<Option<Grid<'a>>, Rejection> {
    let Query { start, target, .. } = *query;
    let grid = Grid::for_start(query.cells, query.width, query.height, start)?;
    if !grid.in_bounds(target) {
        return Err(Rejection::TargetOutOfBounds(target));
    }

    let distance = start.manhattan_distance(target);
    if distance as usize > capacity {
        return Err(Rejection::BeyondCapacity { distance, capacity });
    }
    if !grid.is_walkable(start) {
        return Err(Rejection::StartBlocked(start));
    }
    if !grid.is_walkable(target) {
        return Err(Rejection::TargetBlocked(target));
    }
    if start == target {
        return Ok(None);
    }
    if grid.walkable_neighbor_count(target) == 0 {
        return Err(Rejection::TargetIsolated(target));
    }
    if grid.walkable_neighbor_count(start) == 0 {
        return Err(Rejection::StartIsolated(start));
    }
    Ok(Some(grid))
}

/// Whether a node at `distance` with `remaining` Manhattan distance left can
/// still produce a path that fits and beats the best one known.
fn worth_expanding(distance: i32, remaining: i32, capacity: i64, best: Option<i32>) -> bool {
    let potential = i64::from(distance) + i64::from(remaining);
    potential <= capacity && best.map_or(true, |best| potential < i64::from(best))
}

fn drive<F: Frontier>(
    grid: &Grid<'_>,
    query: &Query<'_>,
    out: &mut [i32],
    mut frontier: F,
    stats: &mut SearchStats,
) -> SearchOutcome {
    let target = query.target;
    let capacity = i64::try_from(out.len()).unwrap_or(i64::MAX);
    let relaxes = frontier.relaxes();

    let mut arena = NodeArena::with_capacity(grid.cell_count().min(out.len().saturating_mul(4)));
    let mut visited = VisitedIndex::new(grid.cell_count());
    let root = arena.push(SearchNode::start(query.start));
    visited.claim(grid.to_index(query.start), root);
    stats.nodes_created = 1;

    let mut best: Option<i32> = None;
    let mut current = Some(root);
    while let Some(id) = current {
        let SearchNode {
            position, distance, ..
        } = arena[id];

        if position == target {
            best = Some(best.map_or(distance, |best| best.min(distance)));
            if frontier.stops_on_first_goal() {
                break;
            }
        } else if worth_expanding(distance, position.manhattan_distance(target), capacity, best) {
            trace!(?position, distance, "expanding");
            stats.nodes_expanded += 1;
            for direction in Direction::ALL {
                let candidate = position.step(direction);
                if let Some(child) = visit(grid, &mut arena, &mut visited, id, candidate, relaxes, stats) {
                    frontier.push(child, &mut arena[child], target);
                }
            }
            stats.observe_frontier(frontier.len());
        }

        current = advance(&mut frontier, &arena, &visited, grid, stats);
    }

    if best.is_none() {
        return SearchOutcome::Exhausted;
    }
    match visited.owner(grid.to_index(target)) {
        Some(goal) => SearchOutcome::Found {
            steps: reconstruct(grid, &arena, goal, out),
        },
        None => SearchOutcome::Exhausted,
    }
}

/// Tries to step from `from` onto `candidate`, returning the new node.
fn visit(
    grid: &Grid<'_>,
    arena: &mut NodeArena,
    visited: &mut VisitedIndex,
    from: NodeId,
    candidate: Position,
    relaxes: bool,
    stats: &mut SearchStats,
) -> Option<NodeId> {
    if !grid.is_walkable(candidate) {
        return None;
    }
    let cell = grid.to_index(candidate);
    if relaxes {
        if let Some(existing) = visited.owner(cell) {
            if arena[existing].distance <= arena[from].distance + 1 {
                return None;
            }
            stats.relaxations += 1;
        }
    } else if visited.is_seen(cell) {
        return None;
    }

    let id = arena.push_child(from, candidate);
    visited.claim(cell, id);
    stats.nodes_created += 1;
    Some(id)
}

/// Pops the next live node. Entries whose cell has since been taken over by
/// a shorter path are dropped.
fn advance<F: Frontier>(
    frontier: &mut F,
    arena: &NodeArena,
    visited: &VisitedIndex,
    grid: &Grid<'_>,
    stats: &mut SearchStats,
) -> Option<NodeId> {
    while let Some(id) = frontier.pop() {
        if visited.owner(grid.to_index(arena[id].position)) == Some(id) {
            return Some(id);
        }
        stats.stale_skipped += 1;
    }
    None
}

/// Writes the chain ending at `goal` into `out`, slot `distance - 1` per
/// node, and returns the path length.
fn reconstruct(grid: &Grid<'_>, arena: &NodeArena, goal: NodeId, out: &mut [i32]) -> i32 {
    // `Grid::new` keeps every cell index within i32.
    for node in arena.chain(goal).take_while(|node| node.parent.is_some()) {
        out[(node.distance - 1) as usize] = grid.to_index(node.position) as i32;
    }
    arena[goal].distance
}
