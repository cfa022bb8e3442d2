//! Errors raised by graph construction and algorithms.
use thiserror::Error;

/// Error type returned when a random graph cannot be built.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BuildError {
    /// More extra edges were requested than there are free ordered node pairs.
    #[error("Cannot add {requested} extra edges, only {available} ordered node pairs are free")]
    TooManyEdges {
        /// Number of extra edges requested
        requested: usize,
        /// Number of ordered pairs left after the Hamiltonian path
        available: usize,
    },
    /// The weight range is empty.
    #[error("Empty weight range {start}..{end}")]
    EmptyWeightRange {
        /// Inclusive lower bound
        start: u64,
        /// Exclusive upper bound
        end: u64,
    },
}

/// Error type used when a spanning tree cannot cover the graph.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum MstError {
    /// The graph is not connected.
    #[error("Graph is disconnected: spanning forest has {found} edges, a tree needs {expected}")]
    Disconnected {
        /// Number of edges selected before running out of candidates
        found: usize,
        /// Number of edges of a spanning tree (`|nodes| - 1`)
        expected: usize,
    },
}

/// Error type for shortest path algorithms.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PathError {
    /// The source node does not belong to the graph.
    #[error("Source node is not part of the graph")]
    UnknownSource,
    /// No unsettled node is reachable while some remain unsettled.
    #[error("Frontier exhausted after settling {settled} of {total} nodes")]
    FrontierExhausted {
        /// Number of settled nodes
        settled: usize,
        /// Number of nodes in the graph
        total: usize,
    },
}
