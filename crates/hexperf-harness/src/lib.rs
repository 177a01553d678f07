#![deny(missing_docs)]
#![doc = "Measurement and analysis harness for hex pattern generators."]

/// Derived series, efficiency metrics and cross-dump comparison.
pub mod analyze;
/// Multi-configuration run orchestration with per-config isolation.
pub mod batch;
/// Parallel job dispatch with order-preserving recombination.
pub mod dispatch;
/// Performance dump document and its on-disk store.
pub mod dump;
/// Outcome normalization into uniform measurement records.
pub mod record;
/// Post-run summaries.
pub mod report;
/// Canonical JSON serde helpers.
pub mod serde;

pub use analyze::{
    diff_dumps, efficiency, efficiency_curve, moving_average, nan_max, EfficiencyPoint, Metric,
    RecordDelta,
};
pub use batch::{measure_config, run_plan, ConfigStatus, RunPlan, RunState};
pub use dispatch::{dispatch, DispatchOpts, RunParams};
pub use dump::{dump_filename, PerfDump};
pub use record::{MeasurementRecord, Outcome, PatternStats};
pub use report::{summarize, DumpSummary, TimeStats};
