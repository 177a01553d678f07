use std::fs;
use std::path::{Path, PathBuf};

use hexperf_core::config::GeneratorConfig;
use hexperf_core::errors::{ErrorInfo, HexperfError};
use serde::{Deserialize, Serialize};

use crate::record::MeasurementRecord;
use crate::serde::{from_json_slice, to_canonical_json_bytes};

fn store_error(code: &str, path: &Path, err: impl ToString) -> HexperfError {
    HexperfError::Store(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Persisted record of one measurement run for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfDump {
    /// Algorithm name derived from the configuration variant.
    pub algorithm: String,
    /// Beam carryover width, when the algorithm has one.
    pub carryover: Option<u32>,
    /// Generator-internal thread count, when the algorithm has one.
    pub num_threads: Option<usize>,
    /// Measurement records in ascending target order.
    pub data: Vec<MeasurementRecord>,
}

impl PerfDump {
    /// Creates an empty dump carrying the configuration's metadata.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            algorithm: config.algorithm_name().to_string(),
            carryover: config.carryover(),
            num_threads: config.num_threads(),
            data: Vec::new(),
        }
    }

    /// Persists the dump under its derived filename in `out_dir`.
    ///
    /// Writes canonical JSON to a temporary sibling and renames it into
    /// place, so a crash mid-write never leaves a truncated artifact.
    /// Returns the final artifact path.
    pub fn save(&self, out_dir: &Path, trim_larger: bool) -> Result<PathBuf, HexperfError> {
        fs::create_dir_all(out_dir).map_err(|err| store_error("dump_out_dir", out_dir, err))?;
        let path = out_dir.join(dump_filename(self, trim_larger));
        let tmp = path.with_extension("json.tmp");
        let bytes = to_canonical_json_bytes(self)?;
        fs::write(&tmp, bytes).map_err(|err| store_error("dump_write", &tmp, err))?;
        fs::rename(&tmp, &path).map_err(|err| store_error("dump_rename", &path, err))?;
        Ok(path)
    }

    /// Loads a previously persisted dump.
    pub fn load(path: &Path) -> Result<Self, HexperfError> {
        let bytes = fs::read(path).map_err(|err| store_error("dump_read", path, err))?;
        from_json_slice(&bytes)
    }
}

/// Derives the artifact filename for a dump.
///
/// Identical configurations map to the identical name (re-runs
/// overwrite their artifact); distinct configurations never collide
/// because every distinguishing parameter lands in the name.
pub fn dump_filename(dump: &PerfDump, trim_larger: bool) -> String {
    let mut filename = dump.algorithm.clone();
    if let Some(carryover) = dump.carryover {
        filename.push_str(&format!("_c{carryover}"));
    }
    if let Some(num_threads) = dump.num_threads {
        filename.push_str(&format!("_t{num_threads}"));
    }
    if !trim_larger {
        filename.push_str("_noTL");
    }
    filename.push_str(".json");
    filename
}
