#![allow(dead_code)]

use bisearch_core::{AdjacencyGraph, BidirectionalSearch, Graph, Path, SearchEvent};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// `1 - 2 - ... - n`
pub fn chain(n: u32) -> AdjacencyGraph<u32> {
    AdjacencyGraph::from_edges((1..n).map(|i| (i, i + 1)))
}

/// Engine with a channel subscribed, reset over `graph`.
pub fn engine_with_events<G: Graph + 'static>(
    graph: G,
    start: G::Node,
    goal: G::Node,
) -> (BidirectionalSearch<G>, UnboundedReceiver<SearchEvent<G::Node>>)
where
    G::Node: Send + 'static,
{
    let (tx, rx) = unbounded_channel();
    let mut engine = BidirectionalSearch::new();
    engine.subscribe(tx);
    engine.reset(Arc::new(graph), start, goal).unwrap();
    (engine, rx)
}

pub fn drain<N>(rx: &mut UnboundedReceiver<SearchEvent<N>>) -> Vec<SearchEvent<N>> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub fn assert_valid_path<G: Graph>(graph: &G, path: &Path<G::Node>, start: &G::Node, goal: &G::Node) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    for (from, to) in path.edges() {
        assert!(
            graph.neighbors(from).contains(to),
            "{:?} -> {:?} is not an edge",
            from,
            to
        );
    }
}

/// Plain single-direction BFS distance, used as a reference.
pub fn bfs_distance<G: Graph>(graph: &G, start: &G::Node, goal: &G::Node) -> Option<usize> {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((node, depth)) = queue.pop_front() {
        if &node == goal {
            return Some(depth);
        }
        for neighbor in graph.neighbors(&node) {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }
    None
}
