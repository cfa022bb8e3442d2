//! Dense distance matrix view of a graph.
use crate::{Distance, Graph, NodeId};
use slotmap::SecondaryMap;
use std::ops;

/// Square matrix of distances, indexed by the dense node index (insertion order of the source
/// graph).
///
/// When built from a graph, cell `(i, j)` holds the cost of the edge `i → j`, [`Distance::ZERO`]
/// on the diagonal, and [`Distance::Infinite`] otherwise.
///
/// # Example
///
/// ```
/// use algobench_graph::{Distance, DistanceMatrix, GraphBase};
///
/// let graph = GraphBase::from_edges(3, [(0, 1, Some(4)), (1, 2, Some(2))]);
/// let matrix = DistanceMatrix::from_graph(&graph);
///
/// assert_eq!(3, matrix.len());
/// assert_eq!(Distance::ZERO, matrix[(1, 1)]);
/// assert_eq!(Distance::Finite(4), matrix[(0, 1)]);
/// assert_eq!(Distance::Infinite, matrix[(0, 2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
    index: SecondaryMap<NodeId, usize>,
}

impl DistanceMatrix {
    /// Build the dense view of a graph.
    ///
    /// Self-loops never overwrite the diagonal, and when a graph holds several edges for the same
    /// ordered pair the cheapest one is kept.
    pub fn from_graph(graph: &impl Graph) -> Self {
        let index = SecondaryMap::from_iter(graph.nodes().enumerate().map(|(i, n)| (n, i)));
        let size = index.len();
        let mut matrix = Self {
            size,
            cells: vec![Distance::Infinite; size * size],
            index,
        };
        for i in 0..size {
            matrix[(i, i)] = Distance::ZERO;
        }
        for (_, edge) in graph.edge_list() {
            let (Some(i), Some(j)) = (matrix.index_of(edge.from), matrix.index_of(edge.to)) else {
                continue;
            };
            let cost = Distance::Finite(edge.cost());
            if cost < matrix[(i, j)] {
                matrix[(i, j)] = cost;
            }
        }
        matrix
    }

    /// Number of rows (and columns) of the matrix.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Dense index of `node`, if it was part of the source graph.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Distance between two indices, or `None` if out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<Distance> {
        (from < self.size && to < self.size).then(|| self.cells[from * self.size + to])
    }

    /// Row of distances starting at `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[Distance] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }
}

impl ops::Index<(usize, usize)> for DistanceMatrix {
    type Output = Distance;

    fn index(&self, (from, to): (usize, usize)) -> &Self::Output {
        assert!(from < self.size && to < self.size, "Index ({from}, {to}) out of bounds");
        &self.cells[from * self.size + to]
    }
}

impl ops::IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (from, to): (usize, usize)) -> &mut Self::Output {
        assert!(from < self.size && to < self.size, "Index ({from}, {to}) out of bounds");
        &mut self.cells[from * self.size + to]
    }
}
