//! Record type definitions and randomized constructors
//!
//! One module per import category:
//!
//! - [`MedicalDevice`] - Yuwell therapy devices with rental pricing
//! - [`DiagnosticDevice`] - measurement devices with clinical parameters
//! - [`Accessory`] - consumables with warranty end dates
//! - [`SparePart`] - repair stock with device compatibility
//!
//! All four share Name, Brand, Model, Stock Location, and Status; the
//! rest of the field set differs per category. `generate` functions are
//! pure in the RNG: same seed, same context, same batch.

pub mod accessory;
pub mod diagnostic;
pub mod medical;
pub mod spare_part;

pub use accessory::Accessory;
pub use diagnostic::DiagnosticDevice;
pub use medical::MedicalDevice;
pub use spare_part::SparePart;

use rand::Rng;
use serde::Serialize;

/// Shared inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenContext {
    /// Stock location label stamped on every record
    pub stock_location: String,
    /// Year baked into serial numbers and warranty dates
    pub year: i32,
}

impl GenContext {
    pub fn new(stock_location: impl Into<String>, year: i32) -> Self {
        Self {
            stock_location: stock_location.into(),
            year,
        }
    }
}

/// Item lifecycle status as the import screens expect it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Active,
    Maintenance,
    ForSale,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Active => write!(f, "ACTIVE"),
            ItemStatus::Maintenance => write!(f, "MAINTENANCE"),
            ItemStatus::ForSale => write!(f, "FOR_SALE"),
        }
    }
}

/// What a medical device is stocked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Destination {
    ForRent,
    ForSale,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::ForRent => write!(f, "FOR_RENT"),
            Destination::ForSale => write!(f, "FOR_SALE"),
        }
    }
}

/// Uniform choice from a catalog table. Tables are compile-time
/// constants and never empty.
pub(crate) fn pick<'a, T>(rng: &mut impl Rng, table: &'a [T]) -> &'a T {
    &table[rng.random_range(0..table.len())]
}

/// Base price plus a bounded random offset, clamped to the floor
pub(crate) fn jitter_price(
    rng: &mut impl Rng,
    base: i64,
    (lo, hi): (i64, i64),
    floor: i64,
) -> i64 {
    (base + rng.random_range(lo..=hi)).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_covers_table() {
        let table = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*pick(&mut rng, &table));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_jitter_price_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = jitter_price(&mut rng, 800, (-100, 200), 1);
            assert!((700..=1000).contains(&p));
        }
    }

    #[test]
    fn test_jitter_price_clamps_to_floor() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            // base 2 with offset down to -10 would go negative unclamped
            let p = jitter_price(&mut rng, 2, (-10, 20), 1);
            assert!(p >= 1);
        }
    }

    #[test]
    fn test_status_serializes_screaming() {
        assert_eq!(ItemStatus::ForSale.to_string(), "FOR_SALE");
        assert_eq!(Destination::ForRent.to_string(), "FOR_RENT");
    }
}
