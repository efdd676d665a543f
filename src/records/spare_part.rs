//! Spare part records - repair stock with device compatibility

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{
    MEDICAL_TYPES, PURCHASE_FLOOR, SALE_FLOOR, SPARE_PART_BRANDS, SPARE_PART_FAMILIES,
    SPARE_PART_JITTER, SPARE_PART_QUANTITY,
};
use crate::core::serial::spare_part_code;
use crate::records::{jitter_price, pick, GenContext, ItemStatus};

/// One spare part row as the import dialog expects it
#[derive(Debug, Clone, Serialize)]
pub struct SparePart {
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

    #[serde(rename = "Warranty")]
    pub warranty: String,

    #[serde(rename = "Compatible Devices")]
    pub compatible_devices: String,

    #[serde(rename = "Status")]
    pub status: ItemStatus,
}

/// Generate a batch of `count` spare parts
pub fn generate(rng: &mut impl Rng, ctx: &GenContext, count: usize) -> Vec<SparePart> {
    (0..count)
        .map(|i| {
            let family = pick(rng, SPARE_PART_FAMILIES);
            let part_type = *pick(rng, family.part_types);
            let brand = *pick(rng, SPARE_PART_BRANDS);

            // Each part fits 1-3 of the medical device types
            let fits = rng.random_range(1..=3);
            let compatible: Vec<&str> = MEDICAL_TYPES
                .choose_multiple(rng, fits)
                .map(|t| t.name)
                .collect();

            SparePart {
                name: format!("{} - {}", family.name, part_type),
                brand,
                model: spare_part_code(brand, family.name, i),
                stock_location: ctx.stock_location.clone(),
                stock_quantity: SPARE_PART_QUANTITY.sample(rng),
                purchase_price: jitter_price(
                    rng,
                    family.base.purchase,
                    SPARE_PART_JITTER.purchase,
                    PURCHASE_FLOOR,
                ),
                selling_price: jitter_price(
                    rng,
                    family.base.sale,
                    SPARE_PART_JITTER.sale,
                    SALE_FLOOR,
                ),
                warranty: format!("{} mois", rng.random_range(6..=24)),
                compatible_devices: compatible.join(", "),
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
        let mut rng = StdRng::seed_from_u64(30);
        assert_eq!(generate(&mut rng, &ctx(), 300).len(), 300);
    }

    #[test]
    fn test_price_floors_hold() {
        // Joint purchase base is 2 with offsets down to -10; without
        // the clamp these would go negative
        let mut rng = StdRng::seed_from_u64(31);
        for part in generate(&mut rng, &ctx(), 500) {
            assert!(part.purchase_price >= PURCHASE_FLOOR);
            assert!(part.selling_price >= SALE_FLOOR);
        }
    }

    #[test]
    fn test_quantities_within_declared_ranges() {
        let mut rng = StdRng::seed_from_u64(32);
        for part in generate(&mut rng, &ctx(), 500) {
            assert!(
                SPARE_PART_QUANTITY.contains(part.stock_quantity),
                "{} outside declared ranges",
                part.stock_quantity
            );
        }
    }

    #[test]
    fn test_compatible_devices_is_small_subset_of_medical_types() {
        let known: HashSet<&str> = MEDICAL_TYPES.iter().map(|t| t.name).collect();

        let mut rng = StdRng::seed_from_u64(33);
        for part in generate(&mut rng, &ctx(), 300) {
            let devices: Vec<&str> = part.compatible_devices.split(", ").collect();
            assert!(
                (1..=3).contains(&devices.len()),
                "expected 1-3 compatible devices, got {:?}",
                devices
            );
            let distinct: HashSet<&str> = devices.iter().copied().collect();
            assert_eq!(distinct.len(), devices.len(), "duplicate in {:?}", devices);
            for d in devices {
                assert!(known.contains(d), "unknown device type {}", d);
            }
        }
    }

    #[test]
    fn test_model_codes_pairwise_distinct() {
        let mut rng = StdRng::seed_from_u64(34);
        let batch = generate(&mut rng, &ctx(), 300);
        let codes: HashSet<&str> = batch.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(codes.len(), batch.len());
    }

    #[test]
    fn test_warranty_between_6_and_24_months() {
        let mut rng = StdRng::seed_from_u64(35);
        for part in generate(&mut rng, &ctx(), 200) {
            let months: u32 = part
                .warranty
                .strip_suffix(" mois")
                .unwrap()
                .parse()
                .unwrap();
            assert!((6..=24).contains(&months));
        }
    }

    #[test]
    fn test_name_combines_family_and_part_type() {
        let mut rng = StdRng::seed_from_u64(36);
        for part in generate(&mut rng, &ctx(), 100) {
            let matched = SPARE_PART_FAMILIES.iter().any(|f| {
                f.part_types
                    .iter()
                    .any(|p| part.name == format!("{} - {}", f.name, p))
            });
            assert!(matched, "unexpected name: {}", part.name);
        }
    }
}
