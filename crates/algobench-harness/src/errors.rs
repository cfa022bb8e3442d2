use crate::Family;
use algobench_graph::errors::{BuildError, MstError, PathError};
use thiserror::Error;

/// Error type of the benchmark harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Reading a sweep file or writing a chart failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The sweep file is not valid JSON, or does not describe a sweep.
    #[error("Invalid sweep file: {0}")]
    Json(#[from] serde_json::Error),
    /// A graph sweep lists a different number of node and edge counts.
    #[error("{family} sweep has {nodes} node counts but {edges} edge counts")]
    MismatchedSizes {
        /// Family of the offending sweep
        family: Family,
        /// Length of the node count list
        nodes: usize,
        /// Length of the edge count list
        edges: usize,
    },
    /// Drawing a chart failed.
    #[error("Cannot draw {family} chart: {message}")]
    Chart {
        /// Family of the chart
        family: Family,
        /// Error reported by the drawing backend
        message: String,
    },
    /// A generated graph has no node to start from.
    #[error("{family} graph has no start node")]
    NoStartNode {
        /// Family the graph was built for
        family: Family,
    },
    /// An input graph could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// A spanning tree could not be computed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Shortest paths could not be computed.
    #[error(transparent)]
    Path(#[from] PathError),
}
