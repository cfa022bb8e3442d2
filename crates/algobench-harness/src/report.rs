//! Destinations for benchmark measurements.
use crate::{Family, HarnessError};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One timed run of an algorithm.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sample {
    /// Algorithm family.
    pub family: Family,
    /// Name of the algorithm within the family.
    pub series: &'static str,
    /// Input size: node count for graph families, digit count for the series family.
    pub size: usize,
    /// Time the algorithm took.
    pub elapsed: Duration,
}

impl Sample {
    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

/// Receiver of measurements.
pub trait ReportSink {
    /// Record a sample.
    fn record(&mut self, sample: &Sample) -> Result<(), HarnessError>;

    /// Called once every sample has been recorded.
    fn finish(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }
}

/// Logs every sample at `info` level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn record(&mut self, sample: &Sample) -> Result<(), HarnessError> {
        log::info!(
            "[{}] {} time: {:.3} ms ({} {})",
            sample.family,
            sample.series,
            sample.millis(),
            sample.size,
            sample.family.size_unit()
        );
        Ok(())
    }
}

/// Keeps every sample in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Recorded samples, in order.
    pub samples: Vec<Sample>,
    /// Number of times [`ReportSink::finish`] was called.
    pub finished: usize,
}

impl MemorySink {
    /// Samples of one algorithm, as `(size, elapsed)` pairs.
    pub fn series(&self, name: &str) -> Vec<(usize, Duration)> {
        self.samples
            .iter()
            .filter(|s| s.series == name)
            .map(|s| (s.size, s.elapsed))
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, sample: &Sample) -> Result<(), HarnessError> {
        self.samples.push(sample.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.finished += 1;
        Ok(())
    }
}

/// Draws one SVG line chart per family, with elapsed time against input size.
///
/// Samples are buffered; charts are written to `<dir>/<family>.svg` when the sink finishes.
#[derive(Debug, Clone)]
pub struct ChartSink {
    dir: PathBuf,
    size: (u32, u32),
    samples: BTreeMap<Family, Vec<Sample>>,
}

impl ChartSink {
    /// Create a chart sink writing into `dir`, which is created if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            size: (1024, 640),
            samples: BTreeMap::new(),
        }
    }

    /// Set the chart dimensions, in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Path of the chart of a family.
    pub fn chart_path(&self, family: Family) -> PathBuf {
        self.dir.join(format!("{family}.svg"))
    }

    fn render(&self, family: Family, samples: &[Sample], path: &Path) -> Result<(), HarnessError> {
        let chart_error = |err: &dyn std::fmt::Display| HarnessError::Chart {
            family,
            message: err.to_string(),
        };
        let x_max = samples.iter().map(|s| s.size).max().unwrap_or(0).max(1);
        let y_max = samples.iter().map(Sample::millis).fold(1e-3, f64::max) * 1.05;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(|e| chart_error(&e))?;
            let mut chart = ChartBuilder::on(&root)
                .caption(family.title(), ("sans-serif", 28))
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(0..x_max, 0f64..y_max)
                .map_err(|e| chart_error(&e))?;
            chart
                .configure_mesh()
                .x_desc(family.size_unit())
                .y_desc("time (ms)")
                .draw()
                .map_err(|e| chart_error(&e))?;

            for (i, name) in family.series().into_iter().enumerate() {
                let mut points: Vec<(usize, f64)> = samples
                    .iter()
                    .filter(|s| s.series == name)
                    .map(|s| (s.size, s.millis()))
                    .collect();
                points.sort_by_key(|(size, _)| *size);
                let color = Palette99::pick(i).to_rgba();
                chart
                    .draw_series(LineSeries::new(points, color.stroke_width(2)))
                    .map_err(|e| chart_error(&e))?
                    .label(name)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
            }

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| chart_error(&e))?;
            root.present().map_err(|e| chart_error(&e))?;
        }

        std::fs::write(path, svg)?;
        log::info!("Wrote {family} chart to {}", path.display());
        Ok(())
    }
}

impl ReportSink for ChartSink {
    fn record(&mut self, sample: &Sample) -> Result<(), HarnessError> {
        self.samples.entry(sample.family).or_default().push(sample.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        if self.samples.is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.dir)?;
        let samples = std::mem::take(&mut self.samples);
        for (family, samples) in &samples {
            self.render(*family, samples, &self.chart_path(*family))?;
        }
        Ok(())
    }
}

/// Forwards samples to several sinks.
#[derive(Default)]
pub struct Fanout {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl Fanout {
    /// Create a fanout over `sinks`.
    pub fn new(sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { sinks }
    }

    /// Add a sink.
    pub fn push(&mut self, sink: impl 'static + ReportSink) {
        self.sinks.push(Box::new(sink));
    }

    /// Number of sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true if there are no sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for Fanout {
    fn record(&mut self, sample: &Sample) -> Result<(), HarnessError> {
        self.sinks.iter_mut().try_for_each(|sink| sink.record(sample))
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.sinks.iter_mut().try_for_each(|sink| sink.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample(series: &'static str, size: usize, ms: u64) -> Sample {
        Sample {
            family: Family::Mst,
            series,
            size,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<MemorySink>>);

    impl ReportSink for Shared {
        fn record(&mut self, sample: &Sample) -> Result<(), HarnessError> {
            self.0.borrow_mut().record(sample)
        }

        fn finish(&mut self) -> Result<(), HarnessError> {
            self.0.borrow_mut().finish()
        }
    }

    #[test]
    fn test_memory_sink_series() {
        let mut sink = MemorySink::default();
        sink.record(&sample("kruskal", 10, 1)).unwrap();
        sink.record(&sample("prim", 10, 2)).unwrap();
        sink.record(&sample("kruskal", 20, 3)).unwrap();

        assert_eq!(
            vec![(10, Duration::from_millis(1)), (20, Duration::from_millis(3))],
            sink.series("kruskal")
        );
        assert_eq!(1, sink.series("prim").len());
        assert!(sink.series("dfs").is_empty());
    }

    #[test]
    fn test_fanout_forwards_everything() {
        let (a, b) = (Shared::default(), Shared::default());
        let mut fanout = Fanout::default();
        fanout.push(a.clone());
        fanout.push(b.clone());
        fanout.push(LogSink);

        fanout.record(&sample("prim", 5, 1)).unwrap();
        fanout.finish().unwrap();

        assert_eq!(3, fanout.len());
        for shared in [a, b] {
            let sink = shared.0.borrow();
            assert_eq!(vec![sample("prim", 5, 1)], sink.samples);
            assert_eq!(1, sink.finished);
        }
    }

    #[test]
    fn test_chart_sink_without_samples_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let mut sink = ChartSink::new(&out);
        sink.finish().unwrap();
        assert!(!out.exists());
    }

    #[rstest]
    #[case(Family::Mst)]
    #[case(Family::Series)]
    fn test_chart_sink_draws_every_family(#[case] family: Family) {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ChartSink::new(dir.path().join("charts")).with_size(640, 480);
        for other in [Family::Mst, Family::Series] {
            for (i, name) in other.series().into_iter().enumerate() {
                for size in [10, 20, 40] {
                    sink.record(&Sample {
                        family: other,
                        series: name,
                        size,
                        elapsed: Duration::from_micros((size * (i + 1)) as u64),
                    })
                    .unwrap();
                }
            }
        }
        sink.finish().unwrap();

        let svg = std::fs::read_to_string(sink.chart_path(family)).unwrap();
        assert!(svg.contains("<svg"));
        for name in family.series() {
            assert!(svg.contains(name), "{name} missing from legend");
        }
        assert!(!sink.chart_path(Family::Paths).exists());
    }

    #[test]
    fn test_chart_path() {
        let sink = ChartSink::new("plots");
        assert_eq!(Path::new("plots").join("paths.svg"), sink.chart_path(Family::Paths));
    }
}
