//! Uniform adjacency interface over the supported topologies.
//!
//! Every topology (free-form node graph, 2D maze, multi-level lattice and the
//! linear pipeline) exposes the same small contract so that a single search
//! engine can serve all of them.

pub mod adjacency;
pub mod grid;
pub mod lattice;
pub mod pipeline;

use std::fmt::Debug;
use std::hash::Hash;

pub use adjacency::AdjacencyGraph;
pub use grid::{Cell, Grid};
pub use lattice::{Lattice, Voxel};
pub use pipeline::Pipeline;

/// Read-only view of an undirected graph with optional obstacles.
///
/// Adjacency must be symmetric: if `b` is among the neighbors of `a`, then
/// `a` is among the neighbors of `b` (whenever both are passable). Both
/// frontiers of a bidirectional search walk the same edge set in opposite
/// directions, so an asymmetric graph yields paths that cannot be followed.
pub trait Graph {
    type Node: Clone + Eq + Hash + Debug;

    /// Passable neighbors of `node`, in the topology's iteration order.
    ///
    /// Walls never appear here. Unknown nodes have no neighbors.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn exists(&self, node: &Self::Node) -> bool;

    /// Whether `node` may be entered. Defaults to plain existence.
    fn is_passable(&self, node: &Self::Node) -> bool {
        self.exists(node)
    }

    fn node_count(&self) -> usize;
}
