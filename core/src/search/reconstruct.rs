use super::state::{Direction, SearchState};
use crate::error::SearchError;
use serde::Serialize;
use std::hash::Hash;

/// Ordered start-to-goal node sequence, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path<N>(Vec<N>);

impl<N> Path<N> {
    pub fn nodes(&self) -> &[N] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked, one less than the node count.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.0.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn first(&self) -> Option<&N> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&N> {
        self.0.last()
    }

    pub fn into_vec(self) -> Vec<N> {
        self.0
    }
}

impl<N: PartialEq> Path<N> {
    pub fn contains(&self, node: &N) -> bool {
        self.0.contains(node)
    }
}

/// Stitches the two parent chains together at the meeting point.
///
/// The start side is walked back from the meeting point and reversed, the goal
/// side is walked forward from the meeting point's goal-parent, so the meeting
/// point appears exactly once. Fails with `NoPathFound` while no meeting point
/// exists, which covers both an exhausted search and one still running.
pub fn reconstruct_path<N: Clone + Eq + Hash>(
    state: &SearchState<N>,
) -> Result<Path<N>, SearchError> {
    let meeting_point = state.meeting_point().ok_or(SearchError::NoPathFound)?;

    let mut path = vec![meeting_point.clone()];
    let mut current = meeting_point;
    while let Some(parent) = state.parent(Direction::Start, current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    let mut current = meeting_point;
    while let Some(parent) = state.parent(Direction::Goal, current) {
        path.push(parent.clone());
        current = parent;
    }

    Ok(Path(path))
}
