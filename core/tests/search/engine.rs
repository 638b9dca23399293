use bisearch_core::{
    AdjacencyGraph, BidirectionalSearch, Cell, Direction, Graph, Grid, SearchError, SearchEvent,
    SearchPhase,
};
use crate::common::{assert_valid_path, chain, drain, engine_with_events};
use std::sync::Arc;

#[test]
fn test_linear_chain_meets_in_the_middle() {
    let (mut engine, _rx) = engine_with_events(chain(5), 1, 5);

    assert_eq!(engine.step().unwrap(), SearchPhase::Running);
    assert_eq!(engine.step().unwrap(), SearchPhase::MeetingFound);

    assert!(engine.is_complete());
    assert_eq!(engine.meeting_point(), Some(&3));
    assert_eq!(engine.reconstruct().unwrap().into_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_open_grid_path_has_manhattan_length() {
    let grid = Grid::square(4);
    let start = Cell::new(0, 0);
    let goal = Cell::new(3, 3);
    let (mut engine, _rx) = engine_with_events(grid.clone(), start, goal);

    assert_eq!(engine.run_to_completion().unwrap(), SearchPhase::MeetingFound);

    let path = engine.reconstruct().unwrap();
    assert_eq!(path.len(), start.manhattan_distance(&goal) + 1);
    assert_eq!(path.len(), 7);
    assert_valid_path(&grid, &path, &start, &goal);
    assert!(path.contains(engine.meeting_point().unwrap()));
}

#[test]
fn test_isolated_goal_reports_no_path() {
    let mut graph = chain(3);
    graph.add_node(99);
    let (mut engine, mut rx) = engine_with_events(graph, 1, 99);

    assert_eq!(engine.run_to_completion().unwrap(), SearchPhase::Exhausted);

    assert!(engine.is_complete());
    assert_eq!(engine.meeting_point(), None);
    assert_eq!(engine.reconstruct().unwrap_err(), SearchError::NoPathFound);

    let events = drain(&mut rx);
    assert_eq!(events.last(), Some(&SearchEvent::Exhausted));
    assert!(!events.iter().any(|e| matches!(e, SearchEvent::Meeting { .. })));
}

#[test]
fn test_adjacent_endpoints_meet_on_first_step() {
    let start = Cell::new(0, 0);
    let goal = Cell::new(0, 1);
    let (mut engine, _rx) = engine_with_events(Grid::square(4), start, goal);

    assert_eq!(engine.step().unwrap(), SearchPhase::MeetingFound);

    let path = engine.reconstruct().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.into_vec(), vec![start, goal]);
}

#[test]
fn test_meeting_short_circuits_remaining_neighbors() {
    // Start (0,0) sees (1,0) first, then the goal at (0,1). Nothing else is
    // discovered and the goal side never expands during that step.
    let (mut engine, mut rx) = engine_with_events(Grid::square(4), Cell::new(0, 0), Cell::new(0, 1));
    engine.step().unwrap();

    let state = engine.state().unwrap();
    assert_eq!(state.visited(Direction::Start).len(), 3);
    assert_eq!(state.visited(Direction::Goal).len(), 1);

    let events = drain(&mut rx);
    let expanded: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, SearchEvent::Expanded { .. }))
        .collect();
    assert_eq!(expanded.len(), 1);
    assert_eq!(
        events.last(),
        Some(&SearchEvent::Meeting {
            node: Cell::new(0, 1)
        })
    );
}

#[test]
fn test_first_meeting_in_iteration_order_wins() {
    // Both 2 and 3 are already seen from the start when 4 expands; 2 comes
    // first in 4's neighbor list, so it is the meeting point.
    let graph = AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    let (mut engine, _rx) = engine_with_events(graph, 1, 4);

    engine.run_to_completion().unwrap();
    assert_eq!(engine.meeting_point(), Some(&2));
    assert_eq!(engine.reconstruct().unwrap().into_vec(), vec![1, 2, 4]);
}

#[test]
fn test_sample_graph_route() {
    let graph = AdjacencyGraph::sample();
    let (mut engine, _rx) = engine_with_events(
        graph,
        AdjacencyGraph::SAMPLE_START,
        AdjacencyGraph::SAMPLE_GOAL,
    );

    engine.run_to_completion().unwrap();

    assert_eq!(engine.meeting_point(), Some(&'I'));
    assert_eq!(
        engine.reconstruct().unwrap().into_vec(),
        vec!['A', 'E', 'I', 'K', 'L']
    );
    let stats = engine.stats();
    assert_eq!(stats.visited_from_start, 7);
    assert_eq!(stats.visited_from_goal, 6);
    assert_eq!(stats.steps, 4);
    assert_eq!(stats.path_length, Some(5));
}

#[test]
fn test_event_sequence_for_chain() {
    let (mut engine, mut rx) = engine_with_events(chain(5), 1, 5);
    engine.run_to_completion().unwrap();

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![
            SearchEvent::Started { start: 1, goal: 5 },
            SearchEvent::Expanded { direction: Direction::Start, node: 1 },
            SearchEvent::Discovered { direction: Direction::Start, from: 1, to: 2 },
            SearchEvent::Expanded { direction: Direction::Goal, node: 5 },
            SearchEvent::Discovered { direction: Direction::Goal, from: 5, to: 4 },
            SearchEvent::Expanded { direction: Direction::Start, node: 2 },
            SearchEvent::Discovered { direction: Direction::Start, from: 2, to: 3 },
            SearchEvent::Expanded { direction: Direction::Goal, node: 4 },
            SearchEvent::Discovered { direction: Direction::Goal, from: 4, to: 3 },
            SearchEvent::Meeting { node: 3 },
        ]
    );
}

#[test]
fn test_step_before_reset_fails() {
    let mut engine: BidirectionalSearch<Grid> = BidirectionalSearch::new();
    assert_eq!(engine.phase(), SearchPhase::Idle);
    assert_eq!(engine.step().unwrap_err(), SearchError::NotInitialized);
    assert_eq!(engine.reconstruct().unwrap_err(), SearchError::NotInitialized);
    assert!(!engine.is_complete());
}

#[test]
fn test_reset_rejects_invalid_endpoints() {
    let mut grid = Grid::square(4);
    grid.set_wall(&Cell::new(2, 2), true);
    let grid = Arc::new(grid);
    let mut engine = BidirectionalSearch::new();

    let same = engine.reset(Arc::clone(&grid), Cell::new(0, 0), Cell::new(0, 0));
    assert!(matches!(same, Err(SearchError::InvalidEndpoints { .. })));

    let outside = engine.reset(Arc::clone(&grid), Cell::new(0, 0), Cell::new(4, 0));
    assert!(matches!(outside, Err(SearchError::InvalidEndpoints { .. })));

    let walled = engine.reset(Arc::clone(&grid), Cell::new(2, 2), Cell::new(0, 0));
    assert!(matches!(walled, Err(SearchError::InvalidEndpoints { .. })));

    assert_eq!(engine.phase(), SearchPhase::Idle);
    assert_eq!(engine.step().unwrap_err(), SearchError::NotInitialized);
}

#[test]
fn test_empty_graph_is_rejected() {
    let mut engine = BidirectionalSearch::new();
    let result = engine.reset(Arc::new(AdjacencyGraph::<u32>::new()), 1, 2);
    assert!(matches!(result, Err(SearchError::InvalidEndpoints { .. })));
}

#[test]
fn test_blocked_endpoint_in_adjacency_graph_is_rejected() {
    let mut graph = chain(3);
    graph.block(&3);
    let mut engine = BidirectionalSearch::new();
    assert!(engine.reset(Arc::new(graph), 1, 3).is_err());
}

#[test]
fn test_step_after_completion_is_noop() {
    let (mut engine, mut rx) = engine_with_events(chain(5), 1, 5);
    engine.run_to_completion().unwrap();
    let before = engine.stats();
    drain(&mut rx);

    assert_eq!(engine.step().unwrap(), SearchPhase::MeetingFound);
    assert_eq!(engine.stats().steps, before.steps);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_reset_starts_a_fresh_run() {
    let graph = Arc::new(chain(6));
    let mut engine = BidirectionalSearch::new();
    engine.reset(Arc::clone(&graph), 1, 6).unwrap();
    engine.run_to_completion().unwrap();

    engine.reset(Arc::clone(&graph), 2, 3).unwrap();
    assert_eq!(engine.phase(), SearchPhase::Running);
    assert_eq!(engine.meeting_point(), None);
    assert_eq!(engine.stats().steps, 0);

    engine.run_to_completion().unwrap();
    assert_eq!(engine.reconstruct().unwrap().into_vec(), vec![2, 3]);
}

#[test]
fn test_walls_force_a_detour() {
    let parsed = Grid::parse(
        "S..\n\
         ##.\n\
         G..\n",
    )
    .unwrap();
    let (start, goal) = (parsed.start.unwrap(), parsed.goal.unwrap());
    let grid = parsed.grid;
    let (mut engine, _rx) = engine_with_events(grid.clone(), start, goal);

    engine.run_to_completion().unwrap();
    let path = engine.reconstruct().unwrap();

    assert_eq!(path.len(), 7);
    assert_valid_path(&grid, &path, &start, &goal);
    assert!(path.nodes().iter().all(|cell| grid.is_passable(cell)));
}
