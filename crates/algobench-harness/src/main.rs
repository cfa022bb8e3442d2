use algobench_harness::{ChartSink, Fanout, Family, LogSink, Runner, Sweep};
use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Benchmark graph algorithms and π series over increasing input sizes.
///
/// Every measurement is logged; unless disabled, one SVG chart per family is written to the plot
/// directory.
#[derive(Debug, Parser)]
#[command(name = "algobench", author, version, about)]
struct Cli {
    /// Benchmarks to run
    #[arg(value_enum, default_value_t = Target::All)]
    target: Target,

    /// Seed of the graph generator (overrides the sweep file)
    #[arg(long, env = "ALGOBENCH_SEED")]
    seed: Option<u64>,

    /// JSON file listing the sizes to run at
    #[arg(long, value_name = "FILE")]
    sweep: Option<PathBuf>,

    /// Directory the charts are written to
    #[arg(long, value_name = "DIR", default_value = "plots")]
    plot_dir: PathBuf,

    /// Do not draw charts
    #[arg(long)]
    no_plot: bool,

    /// Abort on the first failing point instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Log more; repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log less; repeat to only show errors
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Target {
    /// DFS and BFS
    Traversal,
    /// Kruskal and Prim
    Mst,
    /// Dijkstra and Floyd-Warshall
    Paths,
    /// Leibniz and Ramanujan π series
    Series,
    /// Everything
    All,
}

impl Target {
    fn families(self) -> &'static [Family] {
        match self {
            Self::Traversal => &[Family::Traversal],
            Self::Mst => &[Family::Mst],
            Self::Paths => &[Family::Paths],
            Self::Series => &[Family::Series],
            Self::All => &Family::ALL,
        }
    }
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (0, 0) => LevelFilter::Info,
            (1, _) => LevelFilter::Debug,
            (_, 0) => LevelFilter::Trace,
            (_, 1) => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    }
}

fn init_env_logger(level: LevelFilter) {
    env_logger::builder()
        .default_format()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_env_logger(cli.log_level());

    let mut sweep = match &cli.sweep {
        Some(path) => Sweep::load(path).with_context(|| format!("Cannot load sweep from {}", path.display()))?,
        None => Sweep::default(),
    };
    if cli.seed.is_some() {
        sweep.seed = cli.seed;
    }

    let mut sink = Fanout::default();
    sink.push(LogSink);
    if !cli.no_plot {
        sink.push(ChartSink::new(&cli.plot_dir));
    }

    let summary = Runner::new(sweep)
        .fail_fast(cli.fail_fast)
        .run(cli.target.families(), &mut sink)
        .context("Benchmark run failed")?;
    log::info!(
        "Done: {} samples recorded, {} points skipped",
        summary.recorded,
        summary.skipped
    );
    Ok(())
}
