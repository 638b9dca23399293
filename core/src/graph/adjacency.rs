use super::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Free-form graph built from explicit node and edge lists.
///
/// Neighbors are reported in insertion order, which is what decides the
/// meeting node when several candidates meet in the same expansion.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    adjacency: FxHashMap<N, Vec<N>>,
    order: Vec<N>,
    blocked: FxHashSet<N>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            order: Vec::new(),
            blocked: FxHashSet::default(),
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds an isolated node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
            self.adjacency.insert(node, Vec::new());
        }
    }

    /// Connects `a` and `b` in both directions, creating missing nodes.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_node(a.clone());
        self.add_node(b.clone());
        Self::link(&mut self.adjacency, &a, &b);
        Self::link(&mut self.adjacency, &b, &a);
    }

    fn link(adjacency: &mut FxHashMap<N, Vec<N>>, from: &N, to: &N) {
        if let Some(list) = adjacency.get_mut(from) {
            if !list.contains(to) {
                list.push(to.clone());
            }
        }
    }

    /// Marks `node` as an obstacle; it stays in the graph but is never expanded.
    pub fn block(&mut self, node: &N) {
        if self.adjacency.contains_key(node) {
            self.blocked.insert(node.clone());
        }
    }

    pub fn unblock(&mut self, node: &N) {
        self.blocked.remove(node);
    }

    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge `a -> b` has a matching `b -> a`.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(node, neighbors)| {
            neighbors.iter().all(|neighbor| {
                self.adjacency
                    .get(neighbor)
                    .is_some_and(|back| back.contains(node))
            })
        })
    }
}

impl AdjacencyGraph<char> {
    /// The twelve-node showcase graph (A through L) used by the 3D view.
    pub fn sample() -> Self {
        let connections: [(char, &[char]); 12] = [
            ('A', &['B', 'C', 'E']),
            ('B', &['A', 'D', 'F']),
            ('C', &['A', 'E']),
            ('D', &['B', 'F', 'G']),
            ('E', &['A', 'C', 'I']),
            ('F', &['B', 'D', 'H']),
            ('G', &['D', 'J']),
            ('H', &['F', 'J', 'K']),
            ('I', &['E', 'K']),
            ('J', &['G', 'H', 'L']),
            ('K', &['H', 'I', 'L']),
            ('L', &['J', 'K']),
        ];

        let mut graph = Self::new();
        for (node, _) in &connections {
            graph.add_node(*node);
        }
        for (node, neighbors) in &connections {
            for neighbor in *neighbors {
                graph.add_edge(*node, *neighbor);
            }
        }
        graph
    }

    pub const SAMPLE_START: char = 'A';
    pub const SAMPLE_GOAL: char = 'L';
}

impl<N: Clone + Eq + Hash + Debug> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        match self.adjacency.get(node) {
            Some(list) => list
                .iter()
                .filter(|neighbor| !self.blocked.contains(*neighbor))
                .cloned()
                .collect(),
            None => vec![],
        }
    }

    fn exists(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn is_passable(&self, node: &N) -> bool {
        self.exists(node) && !self.blocked.contains(node)
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_is_symmetric() {
        let graph = AdjacencyGraph::sample();
        assert_eq!(graph.node_count(), 12);
        assert!(graph.is_symmetric());
        assert_eq!(graph.neighbors(&'A'), vec!['B', 'C', 'E']);
    }

    #[test]
    fn test_duplicate_edges_are_ignored() {
        let graph = AdjacencyGraph::from_edges([(1, 2), (2, 1), (1, 2)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&1), vec![2]);
    }

    #[test]
    fn test_blocked_nodes_are_hidden() {
        let mut graph = AdjacencyGraph::from_edges([(1, 2), (1, 3)]);
        graph.block(&2);
        assert_eq!(graph.neighbors(&1), vec![3]);
        assert!(graph.exists(&2));
        assert!(!graph.is_passable(&2));

        graph.unblock(&2);
        assert_eq!(graph.neighbors(&1), vec![2, 3]);
    }
}
