//! Accessory records - consumables (masks, circuits, filters, ...)

use rand::Rng;
use serde::Serialize;

use crate::catalog::{
    ACCESSORY_BRANDS, ACCESSORY_JITTER, ACCESSORY_QUANTITY, ACCESSORY_TYPES, PURCHASE_FLOOR,
    SALE_FLOOR,
};
use crate::core::serial::accessory_code;
use crate::records::{jitter_price, pick, GenContext, ItemStatus};

/// One accessory row as the import dialog expects it
#[derive(Debug, Clone, Serialize)]
pub struct Accessory {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Brand")]
    pub brand: &'static str,

    #[serde(rename = "Model")]
    pub model: String,

    #[serde(rename = "Stock Location")]
    pub stock_location: String,

    #[serde(rename = "Stock Quantity")]
    pub stock_quantity: u32,

    #[serde(rename = "Purchase Price")]
    pub purchase_price: i64,

    #[serde(rename = "Selling Price")]
    pub selling_price: i64,

    #[serde(rename = "Warranty End")]
    pub warranty_end: String,

    #[serde(rename = "Status")]
    pub status: ItemStatus,
}

/// Generate a batch of `count` accessories
pub fn generate(rng: &mut impl Rng, ctx: &GenContext, count: usize) -> Vec<Accessory> {
    (0..count)
        .map(|i| {
            let accessory_type = pick(rng, ACCESSORY_TYPES);
            let sub_type = *pick(rng, accessory_type.sub_types);
            let brand = *pick(rng, ACCESSORY_BRANDS);

            // Warranty runs out some day next year; day capped at 28 so
            // every month is valid
            let warranty_end = format!(
                "{}-{:02}-{:02}",
                ctx.year + 1,
                rng.random_range(1..=12),
                rng.random_range(1..=28)
            );

            Accessory {
                name: format!("{} {}", accessory_type.name, sub_type),
                brand,
                model: accessory_code(brand, sub_type, i),
                stock_location: ctx.stock_location.clone(),
                stock_quantity: ACCESSORY_QUANTITY.sample(rng),
                purchase_price: jitter_price(
                    rng,
                    accessory_type.base.purchase,
                    ACCESSORY_JITTER.purchase,
                    PURCHASE_FLOOR,
                ),
                selling_price: jitter_price(
                    rng,
                    accessory_type.base.sale,
                    ACCESSORY_JITTER.sale,
                    SALE_FLOOR,
                ),
                warranty_end,
                status: ItemStatus::ForSale,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ctx() -> GenContext {
        GenContext::new("bureau pricipale", 2026)
    }

    #[test]
    fn test_batch_length_matches_request() {
        let mut rng = StdRng::seed_from_u64(20);
        assert_eq!(generate(&mut rng, &ctx(), 200).len(), 200);
    }

    #[test]
    fn test_price_floors_hold() {
        // Filtre purchase base is 5 with offsets down to -5: the clamp
        // is what keeps these at 1 instead of 0
        let mut rng = StdRng::seed_from_u64(21);
        for accessory in generate(&mut rng, &ctx(), 500) {
            assert!(accessory.purchase_price >= PURCHASE_FLOOR);
            assert!(accessory.selling_price >= SALE_FLOOR);
        }
    }

    #[test]
    fn test_quantities_within_declared_ranges() {
        let mut rng = StdRng::seed_from_u64(22);
        for accessory in generate(&mut rng, &ctx(), 500) {
            assert!(
                ACCESSORY_QUANTITY.contains(accessory.stock_quantity),
                "{} outside declared ranges",
                accessory.stock_quantity
            );
        }
    }

    #[test]
    fn test_model_codes_pairwise_distinct() {
        // the index suffix makes codes unique even when brand and
        // sub-type repeat
        let mut rng = StdRng::seed_from_u64(23);
        let batch = generate(&mut rng, &ctx(), 200);
        let codes: HashSet<&str> = batch.iter().map(|a| a.model.as_str()).collect();
        assert_eq!(codes.len(), batch.len());
    }

    #[test]
    fn test_warranty_end_is_next_year() {
        let mut rng = StdRng::seed_from_u64(24);
        for accessory in generate(&mut rng, &ctx(), 100) {
            assert!(accessory.warranty_end.starts_with("2027-"));
            assert_eq!(accessory.warranty_end.len(), 10);
        }
    }

    #[test]
    fn test_status_for_sale() {
        let mut rng = StdRng::seed_from_u64(25);
        for accessory in generate(&mut rng, &ctx(), 50) {
            assert_eq!(accessory.status, ItemStatus::ForSale);
        }
    }

    #[test]
    fn test_name_combines_type_and_sub_type() {
        let mut rng = StdRng::seed_from_u64(26);
        for accessory in generate(&mut rng, &ctx(), 100) {
            let matched = ACCESSORY_TYPES.iter().any(|t| {
                t.sub_types
                    .iter()
                    .any(|s| accessory.name == format!("{} {}", t.name, s))
            });
            assert!(matched, "unexpected name: {}", accessory.name);
        }
    }
}
