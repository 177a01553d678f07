use hexperf_core::errors::{ErrorInfo, HexperfError};
use serde::{Deserialize, Serialize};

use crate::dump::PerfDump;
use crate::record::MeasurementRecord;

fn analysis_error(code: &str, message: impl Into<String>) -> HexperfError {
    HexperfError::Analysis(ErrorInfo::new(code, message))
}

/// Numeric columns that can be extracted from a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Wall-clock generation time in seconds.
    Time,
    /// Number of points in the pattern.
    Points,
    /// Number of segments in the pattern.
    Segments,
    /// Largest bounding dimension.
    LargestDim,
    /// Size proxy `q * r * s`.
    QuasiArea,
}

impl Metric {
    /// Extracts this metric as a series aligned to the dump's record order.
    ///
    /// Time is always present; stat metrics are missing on failed
    /// records and on records whose generator did not report the field.
    pub fn extract(&self, dump: &PerfDump) -> Vec<Option<f64>> {
        dump.data.iter().map(|record| self.value(record)).collect()
    }

    fn value(&self, record: &MeasurementRecord) -> Option<f64> {
        match self {
            Metric::Time => Some(record.time),
            Metric::Points => record.outcome.stats()?.points.map(|v| v as f64),
            Metric::Segments => record.outcome.stats()?.segments.map(|v| v as f64),
            Metric::LargestDim => record.outcome.stats()?.largest_dim.map(f64::from),
            Metric::QuasiArea => record.outcome.stats()?.quasi_area.map(|v| v as f64),
        }
    }
}

/// Trailing moving average over a series with missing entries.
///
/// The output has the same length as the input. Indices below `n - 1`
/// are missing, and a window containing any missing entry produces a
/// missing output.
pub fn moving_average(series: &[Option<f64>], n: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; series.len()];
    if n == 0 {
        return out;
    }
    for i in (n - 1)..series.len() {
        let window = &series[i + 1 - n..=i];
        if window.iter().all(Option::is_some) {
            let sum: f64 = window.iter().flatten().sum();
            out[i] = Some(sum / n as f64);
        }
    }
    out
}

/// Maximum of a series ignoring missing entries.
///
/// Returns `None` when every entry is missing.
pub fn nan_max(series: &[Option<f64>]) -> Option<f64> {
    series
        .iter()
        .flatten()
        .copied()
        .fold(None, |acc, value| match acc {
            None => Some(value),
            Some(best) => Some(best.max(value)),
        })
}

/// Parallel efficiency of one thread count relative to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyPoint {
    /// Thread count of the parallel configuration.
    pub num_threads: usize,
    /// Mean per-target speedup divided by the thread count.
    pub efficiency: f64,
}

/// Mean per-target parallel efficiency over the whole domain.
///
/// Each target contributes `baseline_time / (threads * parallel_time)`
/// and the result is the mean of those ratios, not a ratio of means.
/// 1.0 is ideal linear speedup.
pub fn efficiency(
    baseline: &PerfDump,
    parallel: &PerfDump,
    num_threads: usize,
) -> Result<f64, HexperfError> {
    if num_threads == 0 {
        return Err(analysis_error("zero_threads", "thread count must be positive"));
    }
    let pairs = aligned_records(baseline, parallel)?;
    let sum: f64 = pairs
        .iter()
        .map(|(base, par)| base.time / (num_threads as f64 * par.time))
        .sum();
    Ok(sum / pairs.len() as f64)
}

/// Efficiency of a family of parallel dumps against one baseline.
pub fn efficiency_curve(
    baseline: &PerfDump,
    parallel: &[(usize, PerfDump)],
) -> Result<Vec<EfficiencyPoint>, HexperfError> {
    parallel
        .iter()
        .map(|(num_threads, dump)| {
            Ok(EfficiencyPoint {
                num_threads: *num_threads,
                efficiency: efficiency(baseline, dump, *num_threads)?,
            })
        })
        .collect()
}

/// Elementwise delta between two dumps' numeric columns for one target.
///
/// The target identity passes through unchanged; a stat cell is missing
/// whenever either side lacks the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDelta {
    /// Target shared by the two aligned records.
    pub target: u64,
    /// Time difference in seconds (left minus right).
    pub time: f64,
    /// Point count difference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Segment count difference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<f64>,
    /// Largest dimension difference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_dim: Option<f64>,
    /// Quasi-area difference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quasi_area: Option<f64>,
}

/// Elementwise numeric difference between two dumps over the same domain.
pub fn diff_dumps(left: &PerfDump, right: &PerfDump) -> Result<Vec<RecordDelta>, HexperfError> {
    let pairs = aligned_records(left, right)?;
    Ok(pairs
        .iter()
        .map(|(a, b)| RecordDelta {
            target: a.target,
            time: a.time - b.time,
            points: delta(Metric::Points, a, b),
            segments: delta(Metric::Segments, a, b),
            largest_dim: delta(Metric::LargestDim, a, b),
            quasi_area: delta(Metric::QuasiArea, a, b),
        })
        .collect())
}

fn delta(metric: Metric, a: &MeasurementRecord, b: &MeasurementRecord) -> Option<f64> {
    Some(metric.value(a)? - metric.value(b)?)
}

fn aligned_records<'a>(
    left: &'a PerfDump,
    right: &'a PerfDump,
) -> Result<Vec<(&'a MeasurementRecord, &'a MeasurementRecord)>, HexperfError> {
    if left.data.is_empty() || right.data.is_empty() {
        return Err(analysis_error("empty_dump", "dumps must contain records"));
    }
    if left.data.len() != right.data.len() {
        return Err(analysis_error(
            "domain_mismatch",
            format!(
                "dumps cover different domains: {} vs {} records",
                left.data.len(),
                right.data.len()
            ),
        ));
    }
    left.data
        .iter()
        .zip(right.data.iter())
        .map(|(a, b)| {
            if a.target != b.target {
                return Err(analysis_error(
                    "target_mismatch",
                    format!("records misaligned at target {} vs {}", a.target, b.target),
                ));
            }
            Ok((a, b))
        })
        .collect()
}
