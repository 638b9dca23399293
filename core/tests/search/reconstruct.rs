use bisearch_core::{AdjacencyGraph, BidirectionalSearch, SearchError, reconstruct_path};
use crate::common::chain;
use std::sync::Arc;

#[test]
fn test_reconstruct_while_running_has_no_path() {
    let mut engine = BidirectionalSearch::new();
    engine.reset(Arc::new(chain(9)), 1, 9).unwrap();
    engine.step().unwrap();

    let state = engine.state().unwrap();
    assert!(!state.is_complete());
    assert_eq!(reconstruct_path(state).unwrap_err(), SearchError::NoPathFound);
}

#[test]
fn test_meeting_point_appears_once() {
    let mut engine = BidirectionalSearch::new();
    engine.reset(Arc::new(chain(8)), 1, 8).unwrap();
    engine.run_to_completion().unwrap();

    let path = engine.reconstruct().unwrap();
    let meeting = engine.meeting_point().unwrap();
    assert_eq!(path.nodes().iter().filter(|n| *n == meeting).count(), 1);
    assert_eq!(path.into_vec(), (1..=8).collect::<Vec<_>>());
}

#[test]
fn test_meeting_at_goal_seed() {
    // The start side reaches the goal seed itself before the goal side moves.
    let graph = AdjacencyGraph::from_edges([(1, 2)]);
    let mut engine = BidirectionalSearch::new();
    engine.reset(Arc::new(graph), 1, 2).unwrap();
    engine.step().unwrap();

    assert_eq!(engine.meeting_point(), Some(&2));
    let path = engine.reconstruct().unwrap();
    assert_eq!(path.hops(), 1);
    assert_eq!(path.edges().collect::<Vec<_>>(), vec![(&1, &2)]);
}

#[test]
fn test_path_serializes_as_plain_list() {
    let mut engine = BidirectionalSearch::new();
    engine.reset(Arc::new(chain(3)), 1, 3).unwrap();
    engine.run_to_completion().unwrap();

    let json = serde_json::to_string(&engine.reconstruct().unwrap()).unwrap();
    assert_eq!(json, "[1,2,3]");
}
