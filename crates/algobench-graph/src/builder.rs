//! Random connected graphs used as benchmark inputs.
use crate::errors::BuildError;
use crate::{Graph, GraphBase, NodeId, OwnedGraph, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Weights drawn by default for weighted graphs.
pub const DEFAULT_WEIGHT_RANGE: Range<Weight> = 10..100_000;

/// Builds connected random graphs.
///
/// The graph has `node_count + 1` nodes, numbered `0..=node_count` by insertion order. A directed
/// path `0 → 1 → … → node_count` is laid down first, so that every node is reachable from node
/// `0`; then `extra_edges` edges are added between uniformly sampled ordered pairs of nodes,
/// skipping pairs that already have an edge. Sampling is with replacement, so self-loops can
/// occur.
///
/// Termination of the sampling loop is probabilistic: as the graph gets close to holding every
/// ordered pair, most samples are rejected and building slows down. Requests for more extra edges
/// than free pairs are rejected with [`BuildError::TooManyEdges`].
///
/// # Example
///
/// ```
/// use algobench_graph::{Graph, RandomGraphBuilder};
///
/// let graph = RandomGraphBuilder::new(10, 5).weighted(true).seed(42).build().unwrap();
/// assert_eq!(11, graph.num_nodes());
/// assert_eq!(10 + 5, graph.num_edges());
/// ```
#[derive(Debug, Clone)]
pub struct RandomGraphBuilder {
    node_count: usize,
    extra_edges: usize,
    weighted: bool,
    weight_range: Range<Weight>,
    seed: Option<u64>,
}

impl RandomGraphBuilder {
    /// Create a builder for an unweighted graph of `node_count + 1` nodes with `extra_edges`
    /// edges on top of the Hamiltonian path.
    pub fn new(node_count: usize, extra_edges: usize) -> Self {
        Self {
            node_count,
            extra_edges,
            weighted: false,
            weight_range: DEFAULT_WEIGHT_RANGE,
            seed: None,
        }
    }

    /// Set whether edges get a random weight.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Set the range weights are uniformly drawn from. Only used for weighted graphs.
    pub fn weight_range(mut self, range: Range<Weight>) -> Self {
        self.weight_range = range;
        self
    }

    /// Seed the random generator, making the built graph reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of ordered node pairs still free once the Hamiltonian path is in place.
    pub fn available_pairs(&self) -> usize {
        let nodes = self.node_count.saturating_add(1);
        nodes.saturating_mul(nodes) - self.node_count
    }

    /// Build the graph, using the configured seed or fresh entropy.
    pub fn build(&self) -> Result<GraphBase, BuildError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with(&mut rng)
    }

    /// Build the graph, drawing from the provided random generator. The configured seed is
    /// ignored.
    #[profiling::function]
    pub fn build_with(&self, rng: &mut impl Rng) -> Result<GraphBase, BuildError> {
        self.validate()?;

        let mut graph = GraphBase::new();
        let nodes: Vec<NodeId> = (0..=self.node_count).map(|_| graph.add_node()).collect();
        for pair in nodes.windows(2) {
            let weight = self.sample_weight(rng);
            graph.add_edge(pair[0], pair[1], weight);
        }

        let mut remaining = self.extra_edges;
        let mut rejected = 0usize;
        while remaining != 0 {
            let u = nodes[rng.gen_range(0..nodes.len())];
            let v = nodes[rng.gen_range(0..nodes.len())];
            if graph.has_edge_between(u, v) {
                rejected += 1;
                continue;
            }
            let weight = self.sample_weight(rng);
            graph.add_edge(u, v, weight);
            remaining -= 1;
        }

        log::debug!(
            "Built graph: {} nodes, {} edges ({} samples rejected)",
            graph.num_nodes(),
            graph.num_edges(),
            rejected
        );
        Ok(graph)
    }

    fn validate(&self) -> Result<(), BuildError> {
        let available = self.available_pairs();
        if self.extra_edges > available {
            return Err(BuildError::TooManyEdges {
                requested: self.extra_edges,
                available,
            });
        }
        if self.weighted && self.weight_range.is_empty() {
            return Err(BuildError::EmptyWeightRange {
                start: self.weight_range.start,
                end: self.weight_range.end,
            });
        }
        Ok(())
    }

    fn sample_weight(&self, rng: &mut impl Rng) -> Option<Weight> {
        self.weighted.then(|| rng.gen_range(self.weight_range.clone()))
    }
}
