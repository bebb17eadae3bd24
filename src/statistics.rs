use std::fmt;

/// Counters collected while one query runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes allocated, including the start node.
    pub nodes_created: usize,
    pub nodes_expanded: usize,
    /// Cells whose node was replaced by a shorter one.
    pub relaxations: usize,
    /// Frontier entries dropped because their cell had been relaxed since.
    pub stale_skipped: usize,
    pub frontier_peak: usize,
}

impl SearchStats {
    pub fn observe_frontier(&mut self, len: usize) {
        self.frontier_peak = self.frontier_peak.max(len);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes created: {}", self.nodes_created)?;
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Peak frontier size: {}", self.frontier_peak)?;
        if self.relaxations > 0 || self.stale_skipped > 0 {
            writeln!(f, "Relaxations: {}", self.relaxations)?;
            writeln!(f, "Stale frontier entries skipped: {}", self.stale_skipped)?;
        }
        Ok(())
    }
}
