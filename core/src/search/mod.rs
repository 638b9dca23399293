//! Two-frontier breadth-first search.
//!
//! One call to [`BidirectionalSearch::step`] expands one node from the start
//! side and then one node from the goal side. The engine never sleeps or
//! spawns; pacing lives in [`crate::driver`].

mod reconstruct;
mod state;

pub use reconstruct::{Path, reconstruct_path};
pub use state::{Direction, SearchState};

use crate::error::SearchError;
use crate::events::{EventBus, EventSink, SearchEvent};
use crate::graph::Graph;
use crate::stats::SearchStats;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Running,
    MeetingFound,
    Exhausted,
}

impl SearchPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchPhase::MeetingFound | SearchPhase::Exhausted)
    }
}

enum Expansion {
    /// The frontier was already empty.
    Skipped,
    Expanded,
    Met,
}

pub struct BidirectionalSearch<G: Graph> {
    graph: Option<Arc<G>>,
    state: Option<SearchState<G::Node>>,
    phase: SearchPhase,
    bus: EventBus<G::Node>,
    steps: usize,
    expansions: usize,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl<G: Graph> Default for BidirectionalSearch<G> {
    fn default() -> Self {
        Self {
            graph: None,
            state: None,
            phase: SearchPhase::Idle,
            bus: EventBus::default(),
            steps: 0,
            expansions: 0,
            started_at: None,
            finished_at: None,
        }
    }
}

impl<G: Graph> BidirectionalSearch<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Subscriptions survive `reset`.
    pub fn subscribe(&mut self, sink: impl EventSink<G::Node> + 'static) {
        self.bus.subscribe(Box::new(sink));
    }

    /// Starts a fresh run over `graph`, discarding any previous state.
    ///
    /// On failure the engine returns to `Idle`.
    pub fn reset(&mut self, graph: Arc<G>, start: G::Node, goal: G::Node) -> Result<(), SearchError> {
        self.graph = None;
        self.state = None;
        self.phase = SearchPhase::Idle;
        self.steps = 0;
        self.expansions = 0;
        self.started_at = None;
        self.finished_at = None;

        validate_endpoints(graph.as_ref(), &start, &goal)?;

        tracing::debug!(?start, ?goal, nodes = graph.node_count(), "search reset");
        self.bus.publish(SearchEvent::Started {
            start: start.clone(),
            goal: goal.clone(),
        });

        self.state = Some(SearchState::new(start, goal));
        self.graph = Some(graph);
        self.phase = SearchPhase::Running;
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// Runs one start-side expansion followed by one goal-side expansion.
    ///
    /// A completed search is left untouched and its terminal phase returned.
    pub fn step(&mut self) -> Result<SearchPhase, SearchError> {
        let (Some(graph), Some(state)) = (self.graph.as_deref(), self.state.as_mut()) else {
            return Err(SearchError::NotInitialized);
        };
        if state.is_complete {
            return Ok(self.phase);
        }

        self.steps += 1;

        for direction in [Direction::Start, Direction::Goal] {
            match expand(graph, state, direction, &mut self.bus) {
                Expansion::Skipped => {}
                Expansion::Expanded => self.expansions += 1,
                Expansion::Met => {
                    self.expansions += 1;
                    self.phase = SearchPhase::MeetingFound;
                    self.finished_at = Some(Instant::now());
                    tracing::debug!(
                        meeting_point = ?state.meeting_point,
                        steps = self.steps,
                        "frontiers met"
                    );
                    return Ok(self.phase);
                }
            }
        }

        if state.frontiers_exhausted() {
            state.is_complete = true;
            self.phase = SearchPhase::Exhausted;
            self.finished_at = Some(Instant::now());
            tracing::debug!(steps = self.steps, "search exhausted without meeting");
            self.bus.publish(SearchEvent::Exhausted);
        }

        Ok(self.phase)
    }

    /// Steps until a terminal phase without any pacing.
    pub fn run_to_completion(&mut self) -> Result<SearchPhase, SearchError> {
        loop {
            let phase = self.step()?;
            if phase.is_terminal() {
                return Ok(phase);
            }
        }
    }

    pub fn reconstruct(&self) -> Result<Path<G::Node>, SearchError> {
        let state = self.state.as_ref().ok_or(SearchError::NotInitialized)?;
        reconstruct_path(state)
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.state.as_ref().is_some_and(SearchState::is_complete)
    }

    pub fn meeting_point(&self) -> Option<&G::Node> {
        self.state.as_ref().and_then(SearchState::meeting_point)
    }

    pub fn state(&self) -> Option<&SearchState<G::Node>> {
        self.state.as_ref()
    }

    pub fn graph(&self) -> Option<&Arc<G>> {
        self.graph.as_ref()
    }

    pub(crate) fn publish(&mut self, event: SearchEvent<G::Node>) {
        self.bus.publish(event);
    }

    pub fn stats(&self) -> SearchStats {
        let Some(state) = self.state.as_ref() else {
            return SearchStats::default();
        };

        let elapsed_ms = match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => finished.duration_since(started).as_millis() as u64,
            (Some(started), None) => started.elapsed().as_millis() as u64,
            _ => 0,
        };

        SearchStats {
            visited_from_start: state.visited(Direction::Start).len(),
            visited_from_goal: state.visited(Direction::Goal).len(),
            total_visited: state.total_visited(),
            expansions: self.expansions,
            steps: self.steps,
            path_length: reconstruct_path(state).ok().map(|path| path.len()),
            elapsed_ms,
        }
    }
}

fn validate_endpoints<G: Graph>(graph: &G, start: &G::Node, goal: &G::Node) -> Result<(), SearchError> {
    if start == goal {
        return Err(SearchError::invalid_endpoints("start and goal are the same node"));
    }
    for (label, node) in [("start", start), ("goal", goal)] {
        if !graph.exists(node) {
            return Err(SearchError::invalid_endpoints(format!("{} {:?} is not in the graph", label, node)));
        }
        if !graph.is_passable(node) {
            return Err(SearchError::invalid_endpoints(format!("{} {:?} is blocked", label, node)));
        }
    }
    Ok(())
}

/// Dequeues one node from `direction` and discovers its unvisited neighbors.
///
/// Stops at the first neighbor already seen from the other side; neighbors
/// after it in iteration order stay undiscovered for this expansion.
fn expand<G: Graph>(
    graph: &G,
    state: &mut SearchState<G::Node>,
    direction: Direction,
    bus: &mut EventBus<G::Node>,
) -> Expansion {
    let Some(current) = state.side_mut(direction).queue.pop_front() else {
        return Expansion::Skipped;
    };

    bus.publish(SearchEvent::Expanded {
        direction,
        node: current.clone(),
    });

    for neighbor in graph.neighbors(&current) {
        if !state.side_mut(direction).visit_neighbor(neighbor.clone(), current.clone()) {
            continue;
        }

        bus.publish(SearchEvent::Discovered {
            direction,
            from: current.clone(),
            to: neighbor.clone(),
        });

        if state.side(direction.opposite()).visited.contains(&neighbor) {
            state.meeting_point = Some(neighbor.clone());
            state.is_complete = true;
            bus.publish(SearchEvent::Meeting { node: neighbor });
            return Expansion::Met;
        }
    }

    Expansion::Expanded
}
