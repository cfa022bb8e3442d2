//! Module of traversal algorithms.
//!
//! Both traversals compute the set of nodes reachable from a start node by following edges in
//! their direction. They return no distances or paths.
use crate::{Graph, NodeId};
use std::collections::{HashSet, VecDeque};

/// Performs a depth-first search (DFS) of the graph starting from a given node, and returns the
/// set of visited nodes.
///
/// The search keeps an explicit stack instead of recursing, so its depth is not bounded by the
/// call stack. Nodes are marked as visited when pushed, which means each node enters the stack at
/// most once. Successors are pushed in reverse so that they are expanded in adjacency order.
///
/// A start node which is not part of the graph yields an empty set.
///
/// ### Example
///
/// ```
/// use algobench_graph::GraphBase;
/// use algobench_graph::algorithms::dfs;
///
/// let graph = GraphBase::from_edges(4, [(0, 1, None), (1, 2, None), (3, 0, None)]);
/// let visited = dfs(&graph, graph.node_at(0).unwrap());
///
/// assert_eq!(3, visited.len());
/// assert!(!visited.contains(&graph.node_at(3).unwrap()));
/// ```
pub fn dfs(graph: &impl Graph, start: NodeId) -> HashSet<NodeId> {
    dfs_with(graph, start, |_| {})
}

/// Depth-first search calling `on_visit` for each node, in visit order. See [`dfs`].
///
/// ### Example
///
/// ```
/// use algobench_graph::GraphBase;
/// use algobench_graph::algorithms::dfs_with;
///
/// let graph = GraphBase::from_edges(4, [(0, 1, None), (0, 2, None), (1, 3, None)]);
/// let mut order = Vec::new();
/// dfs_with(&graph, graph.node_at(0).unwrap(), |node| order.push(graph.index_of(node).unwrap()));
///
/// assert_eq!(vec![0, 1, 3, 2], order);
/// ```
#[profiling::function]
pub fn dfs_with(graph: &impl Graph, start: NodeId, mut on_visit: impl FnMut(NodeId)) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    if !graph.has_node(start) {
        return visited;
    }
    visited.insert(start);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        on_visit(node);
        let top = stack.len();
        for next in graph.successors(node) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
        stack[top..].reverse();
    }
    visited
}

/// Performs a breadth-first search (BFS) of the graph starting from a given node, and returns the
/// set of visited nodes.
///
/// Nodes are marked as visited when enqueued, so that no node is enqueued twice.
///
/// A start node which is not part of the graph yields an empty set.
///
/// ### Example
///
/// ```
/// use algobench_graph::GraphBase;
/// use algobench_graph::algorithms::bfs;
///
/// let graph = GraphBase::from_edges(4, [(0, 1, None), (0, 2, None), (2, 0, None), (3, 0, None)]);
/// let visited = bfs(&graph, graph.node_at(0).unwrap());
///
/// assert_eq!(3, visited.len());
/// ```
pub fn bfs(graph: &impl Graph, start: NodeId) -> HashSet<NodeId> {
    bfs_with(graph, start, |_| {})
}

/// Breadth-first search calling `on_visit` for each node, in visit order. See [`bfs`].
#[profiling::function]
pub fn bfs_with(graph: &impl Graph, start: NodeId, mut on_visit: impl FnMut(NodeId)) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    if !graph.has_node(start) {
        return visited;
    }
    visited.insert(start);
    let mut queue = VecDeque::from_iter([start]);
    while let Some(node) = queue.pop_front() {
        on_visit(node);
        for next in graph.successors(node) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited
}
