//! Per-node index of outgoing edges.
//!
//! [`AdjacencyList`] is the view walked by the traversals and by Dijkstra: visiting a node costs
//! its out-degree instead of a scan over every edge.
use crate::{Edge, EdgeId, FromGraph, Graph, NodeId};
use slotmap::SecondaryMap;

/// Graph view indexing the outgoing edges of every node.
///
/// Built with [`FromGraph::from_graph`] in `O(V + E)`; IDs are those of the source graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    order: Vec<NodeId>,
    data: SecondaryMap<EdgeId, Edge>,
    out: SecondaryMap<NodeId, Vec<EdgeId>>,
}

impl AdjacencyList {
    /// Out-degree of `node`; 0 for nodes outside the graph.
    pub fn degree(&self, node: NodeId) -> usize {
        self.out.get(node).map_or(0, Vec::len)
    }
}

impl Graph for AdjacencyList {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.data.get(id).copied()
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.order.iter().copied()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.data.keys()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.out.contains_key(node)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.data.contains_key(id)
    }

    fn num_nodes(&self) -> usize {
        self.order.len()
    }

    fn num_edges(&self) -> usize {
        self.data.len()
    }

    fn outgoing(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.out.get(node).into_iter().flatten().copied()
    }
}

impl FromGraph for AdjacencyList {
    fn from_graph(graph: &impl Graph) -> Self {
        let order: Vec<NodeId> = graph.nodes().collect();
        let mut out: SecondaryMap<NodeId, Vec<EdgeId>> = order.iter().map(|n| (*n, Vec::new())).collect();
        let mut data = SecondaryMap::new();
        for (id, edge) in graph.edge_list() {
            // Edges from outside the node set are dropped
            let Some(list) = out.get_mut(edge.from) else {
                continue;
            };
            list.push(id);
            data.insert(id, edge);
        }
        Self { order, data, out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBase;

    #[test]
    fn test_outgoing_matches_base_graph() {
        let graph = GraphBase::from_edges(4, [(0, 1, None), (0, 2, None), (2, 3, None), (3, 0, None), (0, 3, None)]);
        let adj = AdjacencyList::from_graph(&graph);

        for node in graph.nodes() {
            let expected: Vec<_> = graph.outgoing(node).collect();
            let actual: Vec<_> = adj.outgoing(node).collect();
            assert_eq!(expected, actual);
        }
        assert_eq!(graph.nodes().collect::<Vec<_>>(), adj.nodes().collect::<Vec<_>>());
        assert_eq!(3, adj.degree(graph.node_at(0).unwrap()));
        assert_eq!(0, adj.degree(graph.node_at(1).unwrap()));
    }

    #[test]
    fn test_unknown_node_has_no_outgoing_edges() {
        let graph = GraphBase::from_edges(2, [(0, 1, None)]);
        let other = GraphBase::from_edges(3, []);
        let adj = AdjacencyList::from_graph(&graph);

        // Keys of another graph may alias, but one past the end never does
        let stranger = other.node_at(2).unwrap();
        assert!(!adj.has_node(stranger));
        assert_eq!(0, adj.outgoing(stranger).count());
    }
}
