use hexperf_core::pattern::GeneratedPattern;
use serde::{Deserialize, Serialize};

/// Statistics captured from a successful generation.
///
/// Every field is independently optional and presence-based so that
/// dumps written against older generator APIs, which expose different
/// subsets of these stats, still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternStats {
    /// Number of distinct points in the pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    /// Number of segments in the pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u64>,
    /// Largest of the three bounding dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest_dim: Option<u32>,
    /// Size proxy `q * r * s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quasi_area: Option<u64>,
    /// Bounding extents along the q, r and s axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(u32, u32, u32)>,
    /// Symbolic pattern representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Normalized result of one generator invocation.
///
/// The discriminant is explicit on the wire (`"status"`); parsing
/// never infers success or failure from which fields happen to be
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The generator produced a pattern.
    Success(PatternStats),
    /// The generator found no solution for the target.
    Failure,
}

impl Outcome {
    /// Normalizes a raw generator return value.
    ///
    /// Computes `quasi_area` and `largest_dim` from the bounds, since
    /// generator API variants do not all supply them directly.
    pub fn from_generated(generated: Option<&GeneratedPattern>) -> Self {
        match generated {
            Some(number) => Outcome::Success(PatternStats {
                points: Some(number.num_points as u64),
                segments: Some(number.num_segments as u64),
                largest_dim: Some(number.bounds.largest_dimension()),
                quasi_area: Some(number.bounds.quasi_area()),
                bounds: Some((number.bounds.q, number.bounds.r, number.bounds.s)),
                pattern: Some(number.pattern.clone()),
            }),
            None => Outcome::Failure,
        }
    }

    /// Returns the captured stats when the outcome is a success.
    pub fn stats(&self) -> Option<&PatternStats> {
        match self {
            Outcome::Success(stats) => Some(stats),
            Outcome::Failure => None,
        }
    }

    /// Whether this outcome records a failed generation.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure)
    }
}

/// One timed measurement for one target. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Target integer the generator was asked to construct.
    pub target: u64,
    /// Wall-clock seconds spent in the generator call.
    pub time: f64,
    /// Normalized generation outcome.
    pub outcome: Outcome,
}

impl MeasurementRecord {
    /// Creates a record from a timed outcome.
    pub fn new(target: u64, time: f64, outcome: Outcome) -> Self {
        Self {
            target,
            time,
            outcome,
        }
    }
}
