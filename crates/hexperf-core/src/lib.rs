#![deny(missing_docs)]
#![doc = "Shared vocabulary for the hexperf measurement harness."]

/// Generator configuration variants and the call contract.
pub mod config;
/// Structured error types shared across hexperf crates.
pub mod errors;
/// Pattern and bounds types returned by the generator.
pub mod pattern;

pub use config::{GeneratorConfig, PatternGenerator};
pub use errors::{ErrorInfo, HexperfError};
pub use pattern::{Bounds, GeneratedPattern};
