//! Drives the algorithms over a sweep.
use crate::clock::{measure, Clock, MonotonicClock};
use crate::report::{ReportSink, Sample};
use crate::sweep::Sweep;
use crate::HarnessError;
use algobench_graph::algorithms::{bfs, dfs, dijkstra, floyd_warshall, kruskal, prim};
use algobench_graph::{AdjacencyList, DistanceMatrix, FromGraph, GraphBase, NodeId, RandomGraphBuilder};
use algobench_series::{PiSeries, SeriesKind};
use std::fmt;
use std::time::Duration;

/// Group of algorithms benchmarked against each other on the same inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Family {
    /// Depth-first and breadth-first search, on unweighted graphs.
    Traversal,
    /// Kruskal and Prim, on weighted graphs.
    Mst,
    /// Dijkstra from the first node and Floyd-Warshall, on weighted graphs.
    Paths,
    /// The two π series.
    Series,
}

impl Family {
    /// All families, in run order.
    pub const ALL: [Self; 4] = [Self::Traversal, Self::Mst, Self::Paths, Self::Series];

    /// Short name, used in file names and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Traversal => "traversal",
            Self::Mst => "mst",
            Self::Paths => "paths",
            Self::Series => "series",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Traversal => "Graph traversal",
            Self::Mst => "Minimum spanning tree",
            Self::Paths => "Shortest paths",
            Self::Series => "π series",
        }
    }

    /// Names of the algorithms of the family, in run order.
    pub fn series(&self) -> [&'static str; 2] {
        match self {
            Self::Traversal => ["dfs", "bfs"],
            Self::Mst => ["kruskal", "prim"],
            Self::Paths => ["dijkstra", "floyd-warshall"],
            Self::Series => SeriesKind::ALL.map(|kind| kind.name()),
        }
    }

    /// Unit of the input size.
    pub fn size_unit(&self) -> &'static str {
        match self {
            Self::Series => "digits",
            _ => "nodes",
        }
    }

    /// Returns true if the family runs on weighted graphs.
    pub fn weighted(&self) -> bool {
        matches!(self, Self::Mst | Self::Paths)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of a finished run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Number of samples sent to the sink.
    pub recorded: usize,
    /// Number of points skipped because of an error.
    pub skipped: usize,
}

/// Runs the benchmarks of a [`Sweep`] and reports samples to a [`ReportSink`].
///
/// For graph families, a single graph is built per point and shared by both algorithms; the
/// adjacency list and distance matrix views are built outside of the timed section. A point
/// failing with an error is logged and skipped, unless [`Runner::fail_fast`] is set.
#[derive(Debug, Clone)]
pub struct Runner<C = MonotonicClock> {
    sweep: Sweep,
    clock: C,
    fail_fast: bool,
}

impl Runner {
    /// Create a runner timing with the wall clock.
    pub fn new(sweep: Sweep) -> Self {
        Self::with_clock(sweep, MonotonicClock)
    }
}

impl<C: Clock> Runner<C> {
    /// Create a runner timing with `clock`.
    pub fn with_clock(sweep: Sweep, clock: C) -> Self {
        Self {
            sweep,
            clock,
            fail_fast: false,
        }
    }

    /// Abort the run on the first failing point instead of skipping it.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Sweep the runner iterates over.
    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    /// Run the given families, then finish the sink.
    ///
    /// # Errors
    ///
    /// Fails if the sweep is invalid, if the sink fails, or on the first failing point when
    /// [`Runner::fail_fast`] is set.
    pub fn run(&self, families: &[Family], sink: &mut dyn ReportSink) -> Result<RunSummary, HarnessError> {
        self.sweep.validate()?;
        let mut summary = RunSummary::default();
        for &family in families {
            self.run_family(family, sink, &mut summary)?;
        }
        sink.finish()?;
        Ok(summary)
    }

    fn run_family(
        &self,
        family: Family,
        sink: &mut dyn ReportSink,
        summary: &mut RunSummary,
    ) -> Result<(), HarnessError> {
        log::info!("Running {} benchmarks", family.title());
        let points: Vec<(usize, usize)> = match self.sweep.graphs(family) {
            Some(graphs) => graphs.points().collect(),
            None => self.sweep.series.iter().map(|digits| (*digits as usize, 0)).collect(),
        };

        for (index, (size, edges)) in points.into_iter().enumerate() {
            let result = match family {
                Family::Traversal => self.build(family, index, size, edges).and_then(|g| self.time_traversal(&g)),
                Family::Mst => self.build(family, index, size, edges).and_then(|g| self.time_mst(&g)),
                Family::Paths => self.build(family, index, size, edges).and_then(|g| self.time_paths(&g)),
                Family::Series => Ok(self.time_series(size as u32)),
            };
            let timings = match result {
                Ok(timings) => timings,
                Err(err) if !self.fail_fast => {
                    log::warn!("Skipping {family} point at {size} {}: {err}", family.size_unit());
                    summary.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };
            for (series, elapsed) in family.series().into_iter().zip(timings) {
                sink.record(&Sample {
                    family,
                    series,
                    size,
                    elapsed,
                })?;
                summary.recorded += 1;
            }
        }
        Ok(())
    }

    fn build(&self, family: Family, index: usize, nodes: usize, edges: usize) -> Result<GraphBase, HarnessError> {
        log::debug!("{family}: {nodes} nodes, {edges} edges");
        let mut builder = RandomGraphBuilder::new(nodes, edges).weighted(family.weighted());
        if let Some(seed) = self.sweep.seed_for(index) {
            builder = builder.seed(seed);
        }
        Ok(builder.build()?)
    }

    fn time_traversal(&self, graph: &GraphBase) -> Result<[Duration; 2], HarnessError> {
        let adj = AdjacencyList::from_graph(graph);
        let start = start_node(Family::Traversal, graph)?;
        let (dfs_reached, dfs_time) = measure(&self.clock, || dfs(&adj, start));
        let (bfs_reached, bfs_time) = measure(&self.clock, || bfs(&adj, start));
        log::debug!("dfs reached {}, bfs reached {}", dfs_reached.len(), bfs_reached.len());
        Ok([dfs_time, bfs_time])
    }

    fn time_mst(&self, graph: &GraphBase) -> Result<[Duration; 2], HarnessError> {
        let (kruskal_tree, kruskal_time) = measure(&self.clock, || kruskal(graph));
        let (prim_tree, prim_time) = measure(&self.clock, || prim(graph));
        let (kruskal_tree, prim_tree) = (kruskal_tree?, prim_tree?);
        if kruskal_tree.total_weight != prim_tree.total_weight {
            log::warn!(
                "Spanning tree weights differ: kruskal {}, prim {}",
                kruskal_tree.total_weight,
                prim_tree.total_weight
            );
        }
        Ok([kruskal_time, prim_time])
    }

    fn time_paths(&self, graph: &GraphBase) -> Result<[Duration; 2], HarnessError> {
        let adj = AdjacencyList::from_graph(graph);
        let mut matrix = DistanceMatrix::from_graph(graph);
        let start = start_node(Family::Paths, graph)?;
        let (paths, dijkstra_time) = measure(&self.clock, || dijkstra(&adj, start));
        let ((), floyd_time) = measure(&self.clock, || floyd_warshall(&mut matrix));
        let paths = paths?;
        log::debug!("dijkstra settled {} nodes", paths.settled());
        Ok([dijkstra_time, floyd_time])
    }

    fn time_series(&self, digits: u32) -> [Duration; 2] {
        SeriesKind::ALL.map(|kind| {
            let (value, elapsed) = measure(&self.clock, || kind.digits(digits));
            log::trace!("{kind}: {digits} digits, {} bits", value.bits());
            elapsed
        })
    }
}

fn start_node(family: Family, graph: &GraphBase) -> Result<NodeId, HarnessError> {
    graph.node_at(0).ok_or(HarnessError::NoStartNode { family })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;
    use crate::sweep::GraphSweep;
    use rstest::rstest;

    fn small_sweep() -> Sweep {
        Sweep {
            traversal: GraphSweep::new(vec![5, 20], vec![5, 40]),
            mst: GraphSweep::new(vec![3, 10, 20], vec![3, 10, 30]),
            paths: GraphSweep::new(vec![5, 10], vec![5, 20]),
            series: vec![10, 50],
            seed: Some(7),
        }
    }

    #[rstest]
    #[case(Family::Traversal, 2)]
    #[case(Family::Mst, 3)]
    #[case(Family::Paths, 2)]
    #[case(Family::Series, 2)]
    fn test_one_sample_per_algorithm_and_point(#[case] family: Family, #[case] points: usize) {
        let mut sink = MemorySink::default();
        let summary = Runner::new(small_sweep()).run(&[family], &mut sink).unwrap();

        assert_eq!(RunSummary { recorded: 2 * points, skipped: 0 }, summary);
        for name in family.series() {
            assert_eq!(points, sink.series(name).len(), "{name}");
        }
        assert!(sink.samples.iter().all(|s| s.family == family));
        assert_eq!(1, sink.finished);
    }

    #[test]
    fn test_sizes_follow_the_sweep() {
        let mut sink = MemorySink::default();
        Runner::new(small_sweep()).run(&[Family::Mst, Family::Series], &mut sink).unwrap();

        let sizes: Vec<_> = sink.series("prim").into_iter().map(|(size, _)| size).collect();
        assert_eq!(vec![3, 10, 20], sizes);
        let sizes: Vec<_> = sink.series("leibniz").into_iter().map(|(size, _)| size).collect();
        assert_eq!(vec![10, 50], sizes);
    }

    #[test]
    fn test_failing_point_is_skipped() {
        let mut sweep = small_sweep();
        // Two nodes have only 3 free ordered pairs
        sweep.mst = GraphSweep::new(vec![1, 10], vec![50, 10]);
        let mut sink = MemorySink::default();
        let summary = Runner::new(sweep).run(&[Family::Mst], &mut sink).unwrap();

        assert_eq!(RunSummary { recorded: 2, skipped: 1 }, summary);
        assert_eq!(vec![10], sink.series("kruskal").into_iter().map(|(n, _)| n).collect::<Vec<_>>());
    }

    #[test]
    fn test_fail_fast() {
        let mut sweep = small_sweep();
        sweep.mst = GraphSweep::new(vec![1, 10], vec![50, 10]);
        let mut sink = MemorySink::default();
        let err = Runner::new(sweep).fail_fast(true).run(&[Family::Mst], &mut sink).unwrap_err();

        assert!(matches!(err, HarnessError::Build(_)), "{err}");
        assert!(sink.samples.is_empty());
        assert_eq!(0, sink.finished);
    }

    #[test]
    fn test_invalid_sweep_is_rejected_before_running() {
        let mut sweep = small_sweep();
        sweep.paths = GraphSweep::new(vec![5], vec![]);
        let mut sink = MemorySink::default();
        let err = Runner::new(sweep).run(&Family::ALL, &mut sink).unwrap_err();

        assert!(matches!(err, HarnessError::MismatchedSizes { family: Family::Paths, .. }));
        assert!(sink.samples.is_empty());
    }

    #[test]
    fn test_empty_graph_has_no_start_node() {
        let err = start_node(Family::Traversal, &GraphBase::new()).unwrap_err();
        assert!(matches!(err, HarnessError::NoStartNode { family: Family::Traversal }));
        assert_eq!("traversal graph has no start node", err.to_string());

        let graph = RandomGraphBuilder::new(3, 0).build().unwrap();
        assert_eq!(graph.node_at(0), start_node(Family::Paths, &graph).ok());
    }

    #[test]
    fn test_family_names() {
        assert_eq!(["ramanujan", "leibniz"], Family::Series.series());
        assert_eq!("mst", Family::Mst.to_string());
        assert!(Family::Paths.weighted());
        assert!(!Family::Traversal.weighted());
    }
}
