use std::path::{Path, PathBuf};

use hexperf_core::config::{GeneratorConfig, PatternGenerator};
use hexperf_core::errors::HexperfError;
use serde::{Deserialize, Serialize};

use crate::dispatch::{dispatch, DispatchOpts, RunParams};
use crate::dump::{dump_filename, PerfDump};

/// Plan for a batch of measurement runs sharing one domain and policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Directory receiving one dump artifact per configuration.
    pub out_dir: PathBuf,
    /// Number of targets; each configuration is measured over `0..domain_size`.
    pub domain_size: u64,
    /// Whether the generator discards candidates larger than the target.
    pub trim_larger: bool,
    /// Whether the generator may use fractional intermediate values.
    pub allow_fractions: bool,
    /// Configurations to measure, in order.
    pub configs: Vec<GeneratorConfig>,
}

/// State of one configuration's run within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    /// Run completed and its artifact was persisted.
    Complete,
    /// Run aborted on a fatal fault.
    Failed,
}

/// Outcome of one configuration's run within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStatus {
    /// Derived artifact filename identifying the configuration.
    pub filename: String,
    /// Whether the run completed or aborted.
    pub state: RunState,
    /// Persisted artifact path, for completed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    /// Fatal fault description, for failed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Measures one configuration over `0..domain_size` and persists the dump.
///
/// The dump starts empty, records land in ascending target order, and
/// the artifact is written exactly once at run end. Returns the
/// artifact path.
pub fn measure_config<G: PatternGenerator>(
    plan: &RunPlan,
    config: &GeneratorConfig,
    generator: &G,
    opts: &DispatchOpts,
) -> Result<PathBuf, HexperfError> {
    let mut dump = PerfDump::new(config);
    let targets: Vec<u64> = (0..plan.domain_size).collect();
    let params = RunParams {
        trim_larger: plan.trim_larger,
        allow_fractions: plan.allow_fractions,
        config: config.clone(),
    };
    dump.data = dispatch(&targets, generator, &params, opts)?;
    dump.save(&plan.out_dir, plan.trim_larger)
}

/// Runs every configuration in the plan, isolating fatal faults.
///
/// A fault in one configuration is captured in its status and the
/// batch moves on to the next; statuses come back in plan order.
pub fn run_plan<G: PatternGenerator>(
    plan: &RunPlan,
    generator: &G,
    opts: &DispatchOpts,
) -> Vec<ConfigStatus> {
    plan.configs
        .iter()
        .map(|config| {
            let filename = dump_filename(&PerfDump::new(config), plan.trim_larger);
            match measure_config(plan, config, generator, opts) {
                Ok(artifact) => {
                    tracing::info!(%filename, "configuration measured");
                    ConfigStatus {
                        filename,
                        state: RunState::Complete,
                        artifact: Some(artifact),
                        error: None,
                    }
                }
                Err(err) => {
                    tracing::error!(%filename, error = %err, "configuration aborted");
                    ConfigStatus {
                        filename,
                        state: RunState::Failed,
                        artifact: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}

impl RunPlan {
    /// Path the given configuration's artifact will be written to.
    pub fn artifact_path(&self, config: &GeneratorConfig) -> PathBuf {
        Path::new(&self.out_dir).join(dump_filename(&PerfDump::new(config), self.trim_larger))
    }
}
