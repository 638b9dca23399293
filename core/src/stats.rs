use serde::Serialize;

/// Counters describing one search run, suitable for a stats panel or a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub visited_from_start: usize,
    pub visited_from_goal: usize,
    /// Union of both visited sets.
    pub total_visited: usize,
    /// Nodes dequeued and expanded, both sides combined.
    pub expansions: usize,
    /// Calls to `step` that did work.
    pub steps: usize,
    /// Node count of the reconstructed path, when one exists.
    pub path_length: Option<usize>,
    pub elapsed_ms: u64,
}

impl SearchStats {
    pub fn path_found(&self) -> bool {
        self.path_length.is_some()
    }
}
