//! Sizes the benchmarks are run at.
//!
//! A sweep lists, for each graph family, node counts and extra edge counts taken pairwise, and
//! for the series family the number of digits to compute. Sweeps are loaded from JSON; every
//! field is optional and falls back to [`Sweep::default`]:
//!
//! ```json
//! {
//!     "mst": { "nodes": [10, 100], "edges": [20, 300] },
//!     "series": [100, 1000],
//!     "seed": 42
//! }
//! ```
use crate::{Family, HarnessError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Node and extra edge counts of a graph family, paired by position.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSweep {
    /// Node counts; each graph has one more node than listed.
    pub nodes: Vec<usize>,
    /// Extra edge counts, on top of the Hamiltonian path.
    pub edges: Vec<usize>,
}

impl GraphSweep {
    /// Create a sweep from node and extra edge counts.
    pub fn new(nodes: Vec<usize>, edges: Vec<usize>) -> Self {
        Self { nodes, edges }
    }

    /// Iterate over `(nodes, edges)` pairs.
    pub fn points(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.nodes.iter().copied().zip(self.edges.iter().copied())
    }

    /// Number of points in the sweep.
    pub fn len(&self) -> usize {
        self.nodes.len().min(self.edges.len())
    }

    /// Returns true if there are no points in the sweep.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, family: Family) -> Result<(), HarnessError> {
        if self.nodes.len() != self.edges.len() {
            return Err(HarnessError::MismatchedSizes {
                family,
                nodes: self.nodes.len(),
                edges: self.edges.len(),
            });
        }
        Ok(())
    }
}

/// Full benchmark sweep.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sweep {
    /// Traversal sizes; graphs are unweighted.
    pub traversal: GraphSweep,
    /// Spanning tree sizes; graphs are weighted.
    pub mst: GraphSweep,
    /// Shortest path sizes; graphs are weighted.
    pub paths: GraphSweep,
    /// Numbers of digits of π to compute.
    pub series: Vec<u32>,
    /// Seed of the graph generator. Point `i` of a family is built with `seed + i`; graphs are
    /// seeded from entropy when unset.
    pub seed: Option<u64>,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            traversal: GraphSweep::new(
                vec![25, 50, 100, 250, 500, 1000, 2000, 3000, 5000],
                vec![25, 50, 100, 500, 1000, 5000, 10000, 20000, 20000],
            ),
            mst: GraphSweep::new(
                vec![3, 10, 20, 35, 50, 75, 100, 200, 300, 400, 500],
                vec![3, 10, 20, 35, 50, 75, 100, 300, 500, 700, 1000],
            ),
            paths: GraphSweep::new(
                vec![5, 10, 25, 50, 75, 100, 200, 300, 400, 500],
                vec![5, 10, 25, 50, 75, 100, 300, 500, 700, 1000],
            ),
            series: vec![
                10, 100, 500, 1000, 2500, 5000, 7500, 10000, 15000, 20000, 30000, 40000, 50000,
            ],
            seed: None,
        }
    }
}

impl Sweep {
    /// Parse a sweep from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let sweep: Self = serde_json::from_str(json)?;
        sweep.validate()?;
        Ok(sweep)
    }

    /// Load a sweep from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that node and edge lists have matching lengths.
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.traversal.validate(Family::Traversal)?;
        self.mst.validate(Family::Mst)?;
        self.paths.validate(Family::Paths)?;
        Ok(())
    }

    /// Graph sizes of a family; `None` for [`Family::Series`].
    pub fn graphs(&self, family: Family) -> Option<&GraphSweep> {
        match family {
            Family::Traversal => Some(&self.traversal),
            Family::Mst => Some(&self.mst),
            Family::Paths => Some(&self.paths),
            Family::Series => None,
        }
    }

    /// Seed of the `index`-th point of a family.
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_valid() {
        let sweep = Sweep::default();
        sweep.validate().unwrap();
        assert_eq!(9, sweep.traversal.len());
        assert_eq!(11, sweep.mst.len());
        assert_eq!(10, sweep.paths.len());
        assert_eq!(13, sweep.series.len());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Sweep::default(), Sweep::from_json("{}").unwrap());
    }

    #[test]
    fn test_partial_json() {
        let sweep = Sweep::from_json(r#"{ "mst": { "nodes": [4], "edges": [8] }, "seed": 3 }"#).unwrap();
        assert_eq!(GraphSweep::new(vec![4], vec![8]), sweep.mst);
        assert_eq!(Sweep::default().paths, sweep.paths);
        assert_eq!(Some(3), sweep.seed);
        assert_eq!(Some(5), sweep.seed_for(2));
    }

    #[rstest]
    #[case(r#"{ "traversal": { "nodes": [1, 2], "edges": [1] } }"#, Family::Traversal)]
    #[case(r#"{ "paths": { "nodes": [], "edges": [5] } }"#, Family::Paths)]
    fn test_mismatched_sizes(#[case] json: &str, #[case] expected: Family) {
        let err = Sweep::from_json(json).unwrap_err();
        assert!(matches!(err, HarnessError::MismatchedSizes { family, .. } if family == expected), "{err}");
    }

    #[rstest]
    #[case(r#"{ "sizes": [] }"#)]
    #[case(r#"{ "mst": { "nodes": [1] } }"#)]
    #[case(r#"{ "series": [-1] }"#)]
    #[case("not json")]
    fn test_invalid_json(#[case] json: &str) {
        assert!(matches!(Sweep::from_json(json), Err(HarnessError::Json(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        std::fs::write(&path, r#"{ "series": [10, 20] }"#).unwrap();
        assert_eq!(vec![10, 20], Sweep::load(&path).unwrap().series);
        assert!(matches!(Sweep::load(dir.path().join("missing.json")), Err(HarnessError::Io(_))));
    }
}
