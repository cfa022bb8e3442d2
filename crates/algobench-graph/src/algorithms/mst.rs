//! Module of minimum spanning tree algorithms.
//!
//! Edges are considered undirected, and their cost is [`Edge::cost`]. Both algorithms sort the
//! edges by cost with a stable sort, so ties are broken by insertion order; on graphs with equal
//! weights they may pick different trees of the same total weight.
use super::union_find::DisjointSet;
use crate::errors::MstError;
use crate::{Edge, EdgeId, Graph, NodeId, Weight};
use slotmap::SecondaryMap;
use std::collections::HashSet;

/// Edges of a spanning tree along with their total weight.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SpanningTree {
    /// Edges of the tree, in the order they were selected.
    pub edges: Vec<EdgeId>,
    /// Sum of the costs of the edges.
    pub total_weight: Weight,
}

impl SpanningTree {
    /// Number of edges in the tree.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn push(&mut self, id: EdgeId, edge: &Edge) {
        self.edges.push(id);
        self.total_weight += edge.cost();
    }
}

fn sorted_edges(graph: &impl Graph) -> Vec<(EdgeId, Edge)> {
    let mut edges: Vec<_> = graph.edge_list().collect();
    edges.sort_by_key(|(_, e)| e.cost());
    edges
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are scanned by increasing cost; an edge is kept when its endpoints belong to different
/// subsets of a union-find structure, which are then merged. The scan stops once the tree holds
/// `|nodes| - 1` edges.
///
/// ### Errors
///
/// Returns [`MstError::Disconnected`] if the edges run out before the tree spans the graph.
///
/// ### Example
///
/// ```
/// use algobench_graph::GraphBase;
/// use algobench_graph::algorithms::kruskal;
///
/// // Triangle: the heaviest edge is left out
/// let graph = GraphBase::from_edges(3, [(0, 1, Some(1)), (1, 2, Some(2)), (2, 0, Some(3))]);
/// let tree = kruskal(&graph).unwrap();
///
/// assert_eq!(2, tree.len());
/// assert_eq!(3, tree.total_weight);
/// ```
#[profiling::function]
pub fn kruskal(graph: &impl Graph) -> Result<SpanningTree, MstError> {
    let index: SecondaryMap<NodeId, usize> = graph.nodes().enumerate().map(|(i, n)| (n, i)).collect();
    let expected = index.len().saturating_sub(1);
    let mut subsets = DisjointSet::new(index.len());
    let mut tree = SpanningTree::default();

    for (id, edge) in sorted_edges(graph) {
        if tree.len() == expected {
            break;
        }
        let (Some(&a), Some(&b)) = (index.get(edge.from), index.get(edge.to)) else {
            continue;
        };
        if subsets.union(a, b) {
            tree.push(id, &edge);
        }
    }

    if tree.len() < expected {
        return Err(MstError::Disconnected {
            found: tree.len(),
            expected,
        });
    }
    log::trace!("kruskal: {} edges, total weight {}", tree.len(), tree.total_weight);
    Ok(tree)
}

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// The tree is seeded with the cheapest edge which is not a self-loop. It then grows by scanning
/// the sorted edge list for the first edge with exactly one endpoint in the tree (the cheapest
/// edge crossing the cut), until it holds `|nodes| - 1` edges.
///
/// Each step is a linear scan over the edges, for `O(V·E)` overall; there is no priority queue.
///
/// ### Errors
///
/// Returns [`MstError::Disconnected`] if no edge crosses the cut before the tree spans the graph.
///
/// ### Example
///
/// ```
/// use algobench_graph::GraphBase;
/// use algobench_graph::algorithms::prim;
///
/// let graph = GraphBase::from_edges(4, [(0, 1, Some(5)), (1, 2, Some(1)), (2, 3, Some(2)), (3, 0, Some(1))]);
/// let tree = prim(&graph).unwrap();
///
/// assert_eq!(3, tree.len());
/// assert_eq!(4, tree.total_weight);
/// ```
#[profiling::function]
pub fn prim(graph: &impl Graph) -> Result<SpanningTree, MstError> {
    let expected = graph.num_nodes().saturating_sub(1);
    let mut tree = SpanningTree::default();
    if expected == 0 {
        return Ok(tree);
    }

    let edges = sorted_edges(graph);
    let Some((id, seed)) = edges.iter().find(|(_, e)| !e.is_loop()) else {
        return Err(MstError::Disconnected { found: 0, expected });
    };
    let mut visited = HashSet::with_capacity(expected + 1);
    visited.insert(seed.from);
    visited.insert(seed.to);
    tree.push(*id, seed);

    while tree.len() < expected {
        let next = edges.iter().find_map(|(id, e)| {
            match (visited.contains(&e.from), visited.contains(&e.to)) {
                (true, false) => Some((id, e, e.to)),
                (false, true) => Some((id, e, e.from)),
                _ => None,
            }
        });
        let Some((id, edge, node)) = next else {
            return Err(MstError::Disconnected {
                found: tree.len(),
                expected,
            });
        };
        visited.insert(node);
        tree.push(*id, edge);
    }

    log::trace!("prim: {} edges, total weight {}", tree.len(), tree.total_weight);
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphBase, RandomGraphBuilder};
    use rstest::rstest;

    fn assert_spanning(graph: &GraphBase, tree: &SpanningTree) {
        let n = graph.num_nodes();
        assert_eq!(n.saturating_sub(1), tree.len());
        let mut set = DisjointSet::new(n);
        for id in &tree.edges {
            let edge = graph[*id];
            let (a, b) = (graph.index_of(edge.from).unwrap(), graph.index_of(edge.to).unwrap());
            assert!(set.union(a, b), "tree contains a cycle");
        }
        let weight: Weight = tree.edges.iter().map(|id| graph[*id].cost()).sum();
        assert_eq!(weight, tree.total_weight);
    }

    #[rstest]
    fn test_path_graph(#[values(kruskal, prim)] algorithm: fn(&GraphBase) -> Result<SpanningTree, MstError>) {
        let graph = GraphBase::from_edges(5, (0..4).map(|i| (i, i + 1, Some(1))));
        let tree = algorithm(&graph).unwrap();

        assert_spanning(&graph, &tree);
        assert_eq!(4, tree.total_weight);
        let expected: HashSet<_> = graph.edges().collect();
        assert_eq!(expected, tree.edges.iter().copied().collect());
    }

    #[rstest]
    fn test_single_node(#[values(kruskal, prim)] algorithm: fn(&GraphBase) -> Result<SpanningTree, MstError>) {
        let graph = RandomGraphBuilder::new(0, 0).weighted(true).build().unwrap();
        assert_eq!(SpanningTree::default(), algorithm(&graph).unwrap());
        assert_eq!(SpanningTree::default(), algorithm(&GraphBase::new()).unwrap());
    }

    #[rstest]
    fn test_disconnected(#[values(kruskal, prim)] algorithm: fn(&GraphBase) -> Result<SpanningTree, MstError>) {
        let graph = GraphBase::from_edges(4, [(0, 1, Some(3)), (2, 3, Some(4))]);
        assert!(matches!(
            algorithm(&graph),
            Err(MstError::Disconnected { expected: 3, .. })
        ));
    }

    #[rstest]
    fn test_self_loops_are_ignored(
        #[values(kruskal, prim)] algorithm: fn(&GraphBase) -> Result<SpanningTree, MstError>,
    ) {
        let graph = GraphBase::from_edges(3, [(1, 1, Some(1)), (0, 1, Some(10)), (1, 2, Some(20)), (2, 2, Some(2))]);
        let tree = algorithm(&graph).unwrap();
        assert_spanning(&graph, &tree);
        assert_eq!(30, tree.total_weight);
    }

    #[rstest]
    fn test_direction_is_ignored(
        #[values(kruskal, prim)] algorithm: fn(&GraphBase) -> Result<SpanningTree, MstError>,
    ) {
        // Node 0 is only reachable against edge direction
        let graph = GraphBase::from_edges(3, [(1, 0, Some(4)), (2, 1, Some(6)), (2, 0, Some(9))]);
        let tree = algorithm(&graph).unwrap();
        assert_spanning(&graph, &tree);
        assert_eq!(10, tree.total_weight);
    }

    #[rstest]
    #[case(3, 3)]
    #[case(50, 50)]
    #[case(200, 300)]
    fn test_kruskal_and_prim_agree(#[case] nodes: usize, #[case] edges: usize) {
        let graph = RandomGraphBuilder::new(nodes, edges)
            .weighted(true)
            .seed(edges as u64)
            .build()
            .unwrap();
        let k = kruskal(&graph).unwrap();
        let p = prim(&graph).unwrap();

        assert_spanning(&graph, &k);
        assert_spanning(&graph, &p);
        assert_eq!(k.total_weight, p.total_weight);
    }

    #[test]
    fn test_ties_have_equal_weight() {
        let graph = RandomGraphBuilder::new(30, 60).weighted(true).weight_range(1..3).seed(8).build().unwrap();
        assert_eq!(kruskal(&graph).unwrap().total_weight, prim(&graph).unwrap().total_weight);
    }

    #[test]
    fn test_idempotent() {
        let graph = RandomGraphBuilder::new(40, 40).weighted(true).seed(2).build().unwrap();
        assert_eq!(kruskal(&graph), kruskal(&graph));
        assert_eq!(prim(&graph), prim(&graph));
    }
}
