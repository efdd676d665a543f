//! Discrete weighted-range sampler for stock quantities
//!
//! Quantities are drawn in two steps: pick a range by integer weight,
//! then a uniform value inside it. The (values, weights) pairs are
//! spelled out explicitly so the skew toward small stock counts is
//! visible in the tables that use this, not buried in a convenience
//! function.

use rand::Rng;

/// One inclusive quantity range with its selection weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedRange {
    pub lo: u32,
    pub hi: u32,
    pub weight: u32,
}

/// A discrete distribution over weighted quantity ranges
#[derive(Debug, Clone, Copy)]
pub struct QuantityModel {
    ranges: &'static [WeightedRange],
}

impl QuantityModel {
    /// Ranges must be non-empty with non-zero total weight; models are
    /// compile-time constants, so violations are programming errors.
    pub const fn new(ranges: &'static [WeightedRange]) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &'static [WeightedRange] {
        self.ranges
    }

    /// Draw a quantity: weighted range choice, then uniform within it
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        let total: u32 = self.ranges.iter().map(|r| r.weight).sum();
        let mut ticket = rng.random_range(0..total);
        for range in self.ranges {
            if ticket < range.weight {
                return rng.random_range(range.lo..=range.hi);
            }
            ticket -= range.weight;
        }
        // ticket < total, so one of the ranges above always wins
        unreachable!("weights exhausted without selecting a range")
    }

    /// Whether a value falls within the union of the declared ranges
    pub fn contains(&self, value: u32) -> bool {
        self.ranges.iter().any(|r| r.lo <= value && value <= r.hi)
    }

    /// Smallest quantity this model can produce
    pub fn min(&self) -> u32 {
        self.ranges.iter().map(|r| r.lo).min().unwrap_or(0)
    }

    /// Largest quantity this model can produce
    pub fn max(&self) -> u32 {
        self.ranges.iter().map(|r| r.hi).max().unwrap_or(0)
    }
}
