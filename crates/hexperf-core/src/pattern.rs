use serde::{Deserialize, Serialize};

/// Bounding box of a generated pattern along the three hex axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Extent along the q axis.
    pub q: u32,
    /// Extent along the r axis.
    pub r: u32,
    /// Extent along the s axis.
    pub s: u32,
}

impl Bounds {
    /// Creates bounds from the three axis extents.
    pub fn new(q: u32, r: u32, s: u32) -> Self {
        Self { q, r, s }
    }

    /// Size proxy `q * r * s`.
    pub fn quasi_area(&self) -> u64 {
        u64::from(self.q) * u64::from(self.r) * u64::from(self.s)
    }

    /// Largest of the three axis extents.
    pub fn largest_dimension(&self) -> u32 {
        self.q.max(self.r).max(self.s)
    }
}

impl From<u32> for Bounds {
    fn from(size: u32) -> Self {
        Self::new(size, size, size)
    }
}

/// Successful generator output for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPattern {
    /// Symbolic angle-sequence representation of the pattern.
    pub pattern: String,
    /// Compass direction of the first segment.
    pub starting_direction: String,
    /// Bounding box of the drawn pattern.
    pub bounds: Bounds,
    /// Number of distinct points visited.
    pub num_points: usize,
    /// Number of segments in the pattern.
    pub num_segments: usize,
}
