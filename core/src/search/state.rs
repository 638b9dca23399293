use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Start,
    Goal,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Start => Direction::Goal,
            Direction::Goal => Direction::Start,
        }
    }
}

/// One half of a bidirectional search: a plain BFS seeded at a single node.
#[derive(Debug, Clone)]
pub(crate) struct BfsState<N> {
    pub(crate) queue: VecDeque<N>,
    pub(crate) visited: FxHashSet<N>,
    pub(crate) parent_map: FxHashMap<N, N>,
}

impl<N: Clone + Eq + Hash> BfsState<N> {
    fn new(seed: N) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(seed.clone());
        visited.insert(seed);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    /// Returns true when `neighbor` had not been seen from this side before.
    pub(crate) fn visit_neighbor(&mut self, neighbor: N, current: N) -> bool {
        if self.visited.contains(&neighbor) {
            return false;
        }
        self.visited.insert(neighbor.clone());
        self.parent_map.insert(neighbor.clone(), current);
        self.queue.push_back(neighbor);
        true
    }
}

/// Everything the engine knows about one search run.
///
/// Created fresh by every `reset`, mutated only by `step`. Readers such as the
/// path reconstructor get shared references only.
#[derive(Debug, Clone)]
pub struct SearchState<N> {
    start: N,
    goal: N,
    pub(crate) from_start: BfsState<N>,
    pub(crate) from_goal: BfsState<N>,
    pub(crate) meeting_point: Option<N>,
    pub(crate) is_complete: bool,
}

impl<N: Clone + Eq + Hash> SearchState<N> {
    pub(crate) fn new(start: N, goal: N) -> Self {
        Self {
            from_start: BfsState::new(start.clone()),
            from_goal: BfsState::new(goal.clone()),
            start,
            goal,
            meeting_point: None,
            is_complete: false,
        }
    }

    pub(crate) fn side(&self, direction: Direction) -> &BfsState<N> {
        match direction {
            Direction::Start => &self.from_start,
            Direction::Goal => &self.from_goal,
        }
    }

    pub(crate) fn side_mut(&mut self, direction: Direction) -> &mut BfsState<N> {
        match direction {
            Direction::Start => &mut self.from_start,
            Direction::Goal => &mut self.from_goal,
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }

    pub fn visited(&self, direction: Direction) -> &FxHashSet<N> {
        &self.side(direction).visited
    }

    pub fn is_visited(&self, direction: Direction, node: &N) -> bool {
        self.side(direction).visited.contains(node)
    }

    /// Nodes discovered but not yet expanded, in dequeue order.
    pub fn frontier(&self, direction: Direction) -> impl Iterator<Item = &N> {
        self.side(direction).queue.iter()
    }

    pub fn frontier_len(&self, direction: Direction) -> usize {
        self.side(direction).queue.len()
    }

    /// The node that first discovered `node` from `direction`. Seeds have none.
    pub fn parent(&self, direction: Direction, node: &N) -> Option<&N> {
        self.side(direction).parent_map.get(node)
    }

    pub fn meeting_point(&self) -> Option<&N> {
        self.meeting_point.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub(crate) fn frontiers_exhausted(&self) -> bool {
        self.from_start.queue.is_empty() && self.from_goal.queue.is_empty()
    }

    /// Nodes seen from either side, counted once.
    pub fn total_visited(&self) -> usize {
        let (small, large) = if self.from_start.visited.len() <= self.from_goal.visited.len() {
            (&self.from_start.visited, &self.from_goal.visited)
        } else {
            (&self.from_goal.visited, &self.from_start.visited)
        };
        let shared = small.iter().filter(|node| large.contains(*node)).count();
        small.len() + large.len() - shared
    }
}
