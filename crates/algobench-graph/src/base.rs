//! Owning graph storage.
use crate::{Edge, EdgeId, Graph, NodeId, OwnedGraph, Weight};
use slotmap::SlotMap;
use std::ops::Index;

/// Owning graph storing nodes and edges in slot maps.
///
/// Nodes keep their insertion order, and each node has a dense index equal to its position in
/// that order, which is the integer ID used by [`DistanceMatrix`](crate::DistanceMatrix) and by
/// benchmark reports.
#[derive(Debug, Default, Clone)]
pub struct GraphBase {
    nodes: SlotMap<NodeId, usize>,
    order: Vec<NodeId>,
    edges: SlotMap<EdgeId, Edge>,
}

impl GraphBase {
    /// Create a new, empty [`GraphBase`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `node_count` nodes and the given edges, referring to nodes by index.
    ///
    /// # Panics
    ///
    /// Panics if an edge refers to a node index `>= node_count`.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_graph::{Graph, GraphBase};
    ///
    /// let graph = GraphBase::from_edges(3, [(0, 1, Some(4)), (1, 2, Some(2))]);
    /// assert_eq!(3, graph.num_nodes());
    /// assert!(graph.has_edge_between(graph.node_at(1).unwrap(), graph.node_at(2).unwrap()));
    /// ```
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, Option<Weight>)>,
    ) -> Self {
        let mut graph = Self::new();
        for _ in 0..node_count {
            graph.add_node();
        }
        for (from, to, weight) in edges {
            let (from, to) = (graph.order[from], graph.order[to]);
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Returns the node inserted at position `index`, if any.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.order.get(index).copied()
    }

    /// Returns the insertion position of `node`, if it belongs to this graph.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.get(node).copied()
    }

    /// Adds an edge unless an edge with the same source and target already exists.
    ///
    /// The duplicate check is a linear scan over the existing edges.
    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<Weight>) -> Option<EdgeId> {
        if self.has_edge_between(from, to) {
            return None;
        }
        Some(self.add_edge(from, to, weight))
    }
}

impl Index<EdgeId> for GraphBase {
    type Output = Edge;

    fn index(&self, index: EdgeId) -> &Self::Output {
        &self.edges[index]
    }
}

impl Graph for GraphBase {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id).copied()
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.order.iter().copied()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges.keys()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    fn num_nodes(&self) -> usize {
        self.order.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge_list(&self) -> impl '_ + Iterator<Item = (EdgeId, Edge)> {
        self.edges.iter().map(|(id, e)| (id, *e))
    }
}

impl OwnedGraph for GraphBase {
    fn add_node(&mut self) -> NodeId {
        let id = self.nodes.insert(self.order.len());
        self.order.push(id);
        id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<Weight>) -> EdgeId {
        self.edges.insert(Edge { from, to, weight })
    }
}
