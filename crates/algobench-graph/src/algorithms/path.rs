//! Module of shortest path algorithms.
use crate::errors::PathError;
use crate::{Distance, DistanceMatrix, Graph, NodeId};
use slotmap::SecondaryMap;

/// Best known distance to a node, and the node it is reached from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct DistanceRecord {
    /// Length of the shortest known path from the source.
    pub distance: Distance,
    /// Previous node on that path; `None` for the source and for unreachable nodes.
    pub predecessor: Option<NodeId>,
}

/// Single-source shortest paths, as computed by [`dijkstra`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    records: SecondaryMap<NodeId, DistanceRecord>,
    settled: usize,
}

impl ShortestPaths {
    /// Source node of the paths.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of nodes whose distance is final.
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Distance from the source to `node`; [`Distance::Infinite`] if it is unreachable or unknown.
    pub fn distance(&self, node: NodeId) -> Distance {
        self.records.get(node).map_or(Distance::Infinite, |r| r.distance)
    }

    /// Previous node on the shortest path from the source to `node`.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.records.get(node).and_then(|r| r.predecessor)
    }

    /// Returns the record for each node of the graph.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (NodeId, DistanceRecord)> {
        self.records.iter().map(|(id, r)| (id, *r))
    }

    /// Nodes of the shortest path from the source to `target`, both included. Returns `None` if
    /// `target` is unreachable.
    ///
    /// ### Example
    ///
    /// ```
    /// use algobench_graph::GraphBase;
    /// use algobench_graph::algorithms::dijkstra;
    ///
    /// let graph = GraphBase::from_edges(3, [(0, 1, Some(1)), (1, 2, Some(1)), (0, 2, Some(5))]);
    /// let paths = dijkstra(&graph, graph.node_at(0).unwrap()).unwrap();
    /// let path = paths.path_to(graph.node_at(2).unwrap()).unwrap();
    ///
    /// assert_eq!(vec![0, 1, 2], path.iter().map(|n| graph.index_of(*n).unwrap()).collect::<Vec<_>>());
    /// ```
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(target).is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.records.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the shortest paths from `source` to every node of the graph with Dijkstra's
/// algorithm, requiring every node to be reachable.
///
/// The next node to settle is picked by a linear scan over the unsettled nodes, which makes the
/// algorithm `O(V²)` overall; there is no priority queue. Edge costs are [`Edge::cost`](crate::Edge::cost).
///
/// ### Errors
///
/// - [`PathError::UnknownSource`] if `source` is not a node of the graph;
/// - [`PathError::FrontierExhausted`] if some node cannot be reached from `source`. Use
///   [`dijkstra_partial`] to get distances on graphs which are not fully reachable.
///
/// ### Example
///
/// ```
/// use algobench_graph::{Distance, GraphBase};
/// use algobench_graph::algorithms::dijkstra;
///
/// let graph = GraphBase::from_edges(4, [(0, 1, Some(2)), (1, 2, Some(2)), (0, 2, Some(7)), (2, 3, Some(1))]);
/// let paths = dijkstra(&graph, graph.node_at(0).unwrap()).unwrap();
///
/// assert_eq!(Distance::Finite(4), paths.distance(graph.node_at(2).unwrap()));
/// assert_eq!(Distance::Finite(5), paths.distance(graph.node_at(3).unwrap()));
/// ```
pub fn dijkstra(graph: &impl Graph, source: NodeId) -> Result<ShortestPaths, PathError> {
    let paths = dijkstra_partial(graph, source)?;
    let total = graph.num_nodes();
    if paths.settled < total {
        return Err(PathError::FrontierExhausted {
            settled: paths.settled,
            total,
        });
    }
    Ok(paths)
}

/// Computes the shortest paths from `source` with Dijkstra's algorithm, stopping when no more
/// nodes can be reached. Unreachable nodes keep a distance of [`Distance::Infinite`].
///
/// ### Errors
///
/// Returns [`PathError::UnknownSource`] if `source` is not a node of the graph.
#[profiling::function]
pub fn dijkstra_partial(graph: &impl Graph, source: NodeId) -> Result<ShortestPaths, PathError> {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    let mut records: SecondaryMap<NodeId, DistanceRecord> =
        nodes.iter().map(|n| (*n, DistanceRecord::default())).collect();
    let Some(record) = records.get_mut(source) else {
        return Err(PathError::UnknownSource);
    };
    record.distance = Distance::ZERO;

    let mut done: SecondaryMap<NodeId, bool> = nodes.iter().map(|n| (*n, false)).collect();
    let mut settled = 0;
    while settled < nodes.len() {
        let closest = nodes
            .iter()
            .copied()
            .filter(|n| !done[*n])
            .min_by_key(|n| records[*n].distance)
            .filter(|n| records[*n].distance.is_finite());
        let Some(u) = closest else {
            break;
        };

        let base = records[u].distance;
        for edge in graph.outgoing(u).filter_map(|id| graph.get_edge(id)) {
            if done.get(edge.to).copied().unwrap_or(true) {
                continue;
            }
            let candidate = base + edge.cost();
            let target = &mut records[edge.to];
            if candidate < target.distance {
                target.distance = candidate;
                target.predecessor = Some(u);
            }
        }
        done[u] = true;
        settled += 1;
    }

    log::trace!("dijkstra: settled {settled} of {} nodes", nodes.len());
    Ok(ShortestPaths {
        source,
        records,
        settled,
    })
}

/// Computes the shortest distances between all pairs of nodes with the Floyd-Warshall algorithm,
/// in place.
///
/// For every intermediate index `k`, source `i` and target `j`, the distance `(i, j)` is lowered
/// to `(i, k) + (k, j)` when shorter. Runs in `O(V³)` time and `O(V²)` space.
///
/// ### Example
///
/// ```rust
/// use algobench_graph::{Distance, DistanceMatrix, GraphBase};
/// use algobench_graph::algorithms::floyd_warshall;
///
/// let graph = GraphBase::from_edges(3, [(0, 1, Some(1)), (1, 2, Some(1)), (0, 2, Some(5))]);
/// let mut distances = DistanceMatrix::from_graph(&graph);
/// floyd_warshall(&mut distances);
///
/// assert_eq!(Distance::Finite(2), distances[(0, 2)]);
/// assert_eq!(Distance::Infinite, distances[(2, 0)]);
/// ```
#[profiling::function]
pub fn floyd_warshall(matrix: &mut DistanceMatrix) {
    let n = matrix.len();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = matrix[(i, k)] + matrix[(k, j)];
                if through < matrix[(i, j)] {
                    matrix[(i, j)] = through;
                }
            }
        }
    }
}
