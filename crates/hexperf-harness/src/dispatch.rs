use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use hexperf_core::config::{GeneratorConfig, PatternGenerator};
use hexperf_core::errors::{ErrorInfo, HexperfError};
use rayon::prelude::*;

use crate::record::{MeasurementRecord, Outcome};

/// Options governing parallel dispatch.
#[derive(Debug, Clone)]
pub struct DispatchOpts {
    /// Number of concurrent workers timing generator calls.
    pub workers: usize,
    /// Emit a progress log line every this many completed targets;
    /// zero disables progress reporting.
    pub progress_every: u64,
}

impl Default for DispatchOpts {
    fn default() -> Self {
        Self {
            // Leave two cores for the controlling process.
            workers: num_cpus::get().saturating_sub(2).max(1),
            progress_every: 10,
        }
    }
}

/// Run parameters fixed for the duration of one dispatch.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// Whether the generator discards candidates larger than the target.
    pub trim_larger: bool,
    /// Whether the generator may use fractional intermediate values.
    pub allow_fractions: bool,
    /// Algorithm configuration passed through to every call.
    pub config: GeneratorConfig,
}

/// Times one generator invocation per target across a worker pool.
///
/// Results come back in `targets` order regardless of which worker
/// finishes first. A generator miss (`Ok(None)`) is timed and recorded
/// as a [`Outcome::Failure`]; a generator fault (`Err`) aborts the
/// whole dispatch and names the offending target. Blocks until every
/// target has completed.
pub fn dispatch<G: PatternGenerator>(
    targets: &[u64],
    generator: &G,
    params: &RunParams,
    opts: &DispatchOpts,
) -> Result<Vec<MeasurementRecord>, HexperfError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.workers.max(1))
        .build()
        .map_err(|err| {
            HexperfError::Dispatch(ErrorInfo::new("thread_pool", err.to_string()))
        })?;

    let completed = AtomicU64::new(0);
    let total = targets.len() as u64;
    let results: Result<Vec<_>, HexperfError> = pool.install(|| {
        targets
            .par_iter()
            .enumerate()
            .map(|(index, &target)| -> Result<(usize, MeasurementRecord), HexperfError> {
                let record = measure_one(generator, target, params)?;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if opts.progress_every > 0 && done % opts.progress_every == 0 {
                    tracing::info!(done, total, "dispatch progress");
                }
                Ok((index, record))
            })
            .collect()
    });

    let mut ordered = results?;
    ordered.sort_by_key(|(index, _)| *index);
    Ok(ordered.into_iter().map(|(_, record)| record).collect())
}

fn measure_one<G: PatternGenerator>(
    generator: &G,
    target: u64,
    params: &RunParams,
) -> Result<MeasurementRecord, HexperfError> {
    let start = Instant::now();
    let generated = generator
        .generate(
            target,
            params.trim_larger,
            params.allow_fractions,
            &params.config,
        )
        .map_err(|err| {
            HexperfError::Generator(
                ErrorInfo::new("generator_fault", err.to_string())
                    .with_context("target", target.to_string()),
            )
        })?;
    let time = start.elapsed().as_secs_f64();

    if generated.is_none() {
        tracing::warn!("failed to generate pattern for target {target}");
    }
    Ok(MeasurementRecord::new(
        target,
        time,
        Outcome::from_generated(generated.as_ref()),
    ))
}
