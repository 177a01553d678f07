use serde::{Deserialize, Serialize};

use crate::errors::HexperfError;
use crate::pattern::GeneratedPattern;

/// Closed set of generator algorithm configurations.
///
/// Each variant carries only the tunables that algorithm understands:
/// beam variants take a `carryover` width, parallel variants take a
/// thread count, and plain A* takes neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum GeneratorConfig {
    /// Single-threaded beam search.
    Beam {
        /// Number of candidate partial solutions kept per step.
        carryover: u32,
    },
    /// Beam search fanning candidate expansion out over a thread pool.
    BeamPool {
        /// Number of candidate partial solutions kept per step.
        carryover: u32,
        /// Worker threads used by the generator.
        num_threads: usize,
    },
    /// Beam search splitting the candidate set across threads.
    BeamSplit {
        /// Number of candidate partial solutions kept per step.
        carryover: u32,
        /// Worker threads used by the generator.
        num_threads: usize,
    },
    /// Sequential A* search.
    AStar,
    /// A* search split across threads.
    AStarSplit {
        /// Worker threads used by the generator.
        num_threads: usize,
    },
}

impl GeneratorConfig {
    /// Returns the stable algorithm name used in dump metadata and filenames.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            GeneratorConfig::Beam { .. } => "Beam",
            GeneratorConfig::BeamPool { .. } => "BeamPool",
            GeneratorConfig::BeamSplit { .. } => "BeamSplit",
            GeneratorConfig::AStar => "AStar",
            GeneratorConfig::AStarSplit { .. } => "AStarSplit",
        }
    }

    /// Returns the beam carryover width, when the variant has one.
    pub fn carryover(&self) -> Option<u32> {
        match self {
            GeneratorConfig::Beam { carryover }
            | GeneratorConfig::BeamPool { carryover, .. }
            | GeneratorConfig::BeamSplit { carryover, .. } => Some(*carryover),
            GeneratorConfig::AStar | GeneratorConfig::AStarSplit { .. } => None,
        }
    }

    /// Returns the generator-internal thread count, when the variant has one.
    pub fn num_threads(&self) -> Option<usize> {
        match self {
            GeneratorConfig::BeamPool { num_threads, .. }
            | GeneratorConfig::BeamSplit { num_threads, .. }
            | GeneratorConfig::AStarSplit { num_threads } => Some(*num_threads),
            GeneratorConfig::Beam { .. } | GeneratorConfig::AStar => None,
        }
    }
}

/// Narrow call contract for the external pattern generator.
///
/// Implementations must be safe to invoke concurrently from multiple
/// worker threads; the harness assumes each call is independent.
pub trait PatternGenerator: Sync {
    /// Attempts to construct a pattern for `target` under `config`.
    ///
    /// `Ok(None)` is an expected miss (no solution found); `Err` is an
    /// unexpected fault and aborts the surrounding run.
    fn generate(
        &self,
        target: u64,
        trim_larger: bool,
        allow_fractions: bool,
        config: &GeneratorConfig,
    ) -> Result<Option<GeneratedPattern>, HexperfError>;
}
