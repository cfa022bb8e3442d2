#![warn(missing_docs)]
//! # Benchmark harness
//!
//! Times the algorithms of `algobench-graph` and `algobench-series` over increasing input sizes
//! and reports the growth curves.
//!
//! A [`Runner`] walks a [`Sweep`], timing each algorithm with a [`Clock`], and hands every
//! [`Sample`] to a [`ReportSink`]: the console through [`LogSink`], SVG charts through
//! [`ChartSink`], or memory through [`MemorySink`].
//!
//! ```
//! use algobench_harness::{Family, MemorySink, Runner, Sweep};
//! use algobench_harness::sweep::GraphSweep;
//!
//! let sweep = Sweep {
//!     mst: GraphSweep::new(vec![10, 20], vec![10, 40]),
//!     seed: Some(1),
//!     ..Sweep::default()
//! };
//! let mut sink = MemorySink::default();
//! let summary = Runner::new(sweep).run(&[Family::Mst], &mut sink).unwrap();
//!
//! assert_eq!(4, summary.recorded);
//! assert_eq!(2, sink.series("kruskal").len());
//! ```
pub mod clock;
mod errors;
pub mod report;
pub mod runner;
pub mod sweep;

pub use clock::{measure, Clock, MonotonicClock};
pub use errors::HarnessError;
pub use report::{ChartSink, Fanout, LogSink, MemorySink, ReportSink, Sample};
pub use runner::{Family, RunSummary, Runner};
pub use sweep::Sweep;
