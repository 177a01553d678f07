use serde::{Deserialize, Serialize};

use crate::dump::PerfDump;

/// Timing statistics over one dump's records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeStats {
    /// Fastest single generation in seconds.
    pub min: f64,
    /// Slowest single generation in seconds.
    pub max: f64,
    /// Mean generation time in seconds.
    pub mean: f64,
    /// Total wall-clock time spent in the generator.
    pub total: f64,
}

/// Post-run summary of one dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpSummary {
    /// Number of records in the dump.
    pub records: usize,
    /// Targets the generator failed to construct, ascending.
    pub failed_targets: Vec<u64>,
    /// Timing statistics across all records.
    pub time: TimeStats,
}

/// Summarizes a dump for post-run reporting.
///
/// An empty dump yields NaN timing statistics and a zero total.
pub fn summarize(dump: &PerfDump) -> DumpSummary {
    let mut failed_targets: Vec<u64> = dump
        .data
        .iter()
        .filter(|record| record.outcome.is_failure())
        .map(|record| record.target)
        .collect();
    failed_targets.sort_unstable();

    let times: Vec<f64> = dump.data.iter().map(|record| record.time).collect();
    let total: f64 = times.iter().sum();
    let time = if times.is_empty() {
        TimeStats {
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            total: 0.0,
        }
    } else {
        TimeStats {
            min: times.iter().copied().fold(f64::INFINITY, f64::min),
            max: times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: total / times.len() as f64,
            total,
        }
    };

    DumpSummary {
        records: dump.data.len(),
        failed_targets,
        time,
    }
}
