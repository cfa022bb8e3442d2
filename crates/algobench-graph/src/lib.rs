#![warn(missing_docs)]
//! # Graph datastructures
//!
//! Implements the graph datastructures and algorithms measured by the benchmark harness.
//!
//! Nodes and edges are tracked by IDs allocated by the owning graph. Every edge carries an
//! optional integer weight; algorithms that need a cost use [`Edge::cost`], which counts
//! unweighted edges as `1`.
//!
//! Two views of a graph are provided on top of the owning [`GraphBase`]:
//!
//! - [`AdjacencyList`], indexing outgoing edges per node, used by the traversals and Dijkstra;
//! - [`DistanceMatrix`], a dense `n × n` matrix used by Floyd-Warshall.
use slotmap::new_key_type;

pub mod adjacency;
pub mod algorithms;
pub mod base;
pub mod builder;
pub mod distance;
pub mod errors;
pub mod matrix;

pub use adjacency::AdjacencyList;
pub use base::GraphBase;
pub use builder::RandomGraphBuilder;
pub use distance::Distance;
pub use matrix::DistanceMatrix;

new_key_type! {
    /// Type of node IDs.
    pub struct NodeId;
    /// Type of edge IDs.
    pub struct EdgeId;
}

/// Type of edge weights.
pub type Weight = u64;

/// Edge data, connecting two nodes together.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Edge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
    /// Weight of the edge, if the graph is weighted.
    pub weight: Option<Weight>,
}

impl Edge {
    /// Cost of traversing this edge: its weight, or `1` for unweighted edges.
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(1)
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Read access to a directed graph.
///
/// Implementors provide edge lookup and iteration over node and edge IDs; everything else has a
/// default implementation which views implement faster where they can.
///
/// # Examples
///
/// ```
/// use algobench_graph::{Graph, GraphBase, OwnedGraph};
///
/// let mut graph = GraphBase::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// let edge = graph.add_edge(a, b, Some(42));
///
/// assert!(graph.has_node(a));
/// assert!(graph.has_edge_between(a, b));
/// assert!(!graph.has_edge_between(b, a));
/// assert_eq!(42, graph.get_edge(edge).unwrap().cost());
/// ```
pub trait Graph {
    /// Edge data for `id`, if it belongs to the graph.
    fn get_edge(&self, id: EdgeId) -> Option<Edge>;

    /// Node IDs, in insertion order.
    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId>;

    /// Edge IDs, in insertion order.
    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId>;

    /// Returns true if `node` belongs to the graph. Scans the nodes by default.
    fn has_node(&self, node: NodeId) -> bool {
        self.nodes().any(|id| id == node)
    }

    /// Returns true if `id` belongs to the graph.
    fn has_edge(&self, id: EdgeId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Node count.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Edge count.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Edges with their data, in insertion order.
    fn edge_list(&self) -> impl '_ + Iterator<Item = (EdgeId, Edge)> {
        self.edges().filter_map(|id| Some((id, self.get_edge(id)?)))
    }

    /// Returns true if some edge leads from `from` to `to`. Scans every edge.
    fn has_edge_between(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_list().any(|(_, e)| e.from == from && e.to == to)
    }

    /// Edges leaving `node`, in insertion order. Scans every edge by default.
    fn outgoing(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edge_list()
            .filter(move |(_, e)| e.from == node)
            .map(|(id, _)| id)
    }

    /// Targets of the edges leaving `node`, once per edge, in insertion order.
    fn successors(&self, node: NodeId) -> impl '_ + Iterator<Item = NodeId> {
        self.outgoing(node)
            .filter_map(|id| self.get_edge(id))
            .map(|e| e.to)
    }
}

/// Graph allocating the IDs of its nodes and edges.
pub trait OwnedGraph: Graph {
    /// Insert a node.
    fn add_node(&mut self) -> NodeId;

    /// Insert an edge from `from` to `to`. Duplicate and self-loop edges are accepted.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<Weight>) -> EdgeId;
}

/// View built from another graph, sharing its IDs.
///
/// # Examples
///
/// ```
/// use algobench_graph::{AdjacencyList, FromGraph, Graph, GraphBase};
///
/// let graph = GraphBase::from_edges(3, [(0, 1, None), (1, 2, None)]);
/// let adj = AdjacencyList::from_graph(&graph);
///
/// assert_eq!(graph.num_nodes(), adj.num_nodes());
/// assert_eq!(graph.num_edges(), adj.num_edges());
/// ```
pub trait FromGraph: Sized {
    /// Build the view from `graph`.
    fn from_graph(graph: &impl Graph) -> Self;
}
