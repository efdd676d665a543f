//! Medical device records - Yuwell therapy fleet (CPAP, VNI, O², ...)

use rand::Rng;
use serde::Serialize;

use crate::catalog::{
    MEDICAL_BRAND, MEDICAL_JITTER, MEDICAL_QUANTITY, MEDICAL_SERIAL_PREFIX, MEDICAL_TYPES,
    PURCHASE_FLOOR, RENTAL_FLOOR, SALE_FLOOR,
};
use crate::core::serial::serial_number;
use crate::records::{jitter_price, pick, Destination, GenContext, ItemStatus};

/// One medical device row as the import dialog expects it
#[derive(Debug, Clone, Serialize)]
pub struct MedicalDevice {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub record_type: &'static str,

    #[serde(rename = "Brand")]
    pub brand: &'static str,

    #[serde(rename = "Model")]
    pub model: &'static str,

    #[serde(rename = "Serial Number")]
    pub serial_number: String,

    #[serde(rename = "Stock Location")]
    pub stock_location: String,

    #[serde(rename = "Stock Quantity")]
    pub stock_quantity: u32,

    #[serde(rename = "Purchase Price")]
    pub purchase_price: i64,

    #[serde(rename = "Selling Price")]
    pub selling_price: i64,

    #[serde(rename = "Rental Price")]
    pub rental_price: i64,

    #[serde(rename = "Technical Specs")]
    pub technical_specs: String,

    #[serde(rename = "Configuration")]
    pub configuration: String,

    #[serde(rename = "Status")]
    pub status: ItemStatus,

    #[serde(rename = "Destination")]
    pub destination: Destination,

    #[serde(rename = "Requires Maintenance")]
    pub requires_maintenance: bool,
}

/// Generate a batch of `count` medical devices
pub fn generate(rng: &mut impl Rng, ctx: &GenContext, count: usize) -> Vec<MedicalDevice> {
    (0..count)
        .map(|i| {
            let device_type = pick(rng, MEDICAL_TYPES);
            let model = *pick(rng, device_type.models);

            // Fleet devices are mostly in service, a few in the shop
            let status = if rng.random_bool(0.25) {
                ItemStatus::Maintenance
            } else {
                ItemStatus::Active
            };
            let destination = *pick(rng, &[Destination::ForRent, Destination::ForSale]);

            MedicalDevice {
                name: device_type.name.to_string(),
                record_type: "MEDICAL_DEVICE",
                brand: MEDICAL_BRAND,
                model,
                serial_number: serial_number(MEDICAL_SERIAL_PREFIX, ctx.year, i),
                stock_location: ctx.stock_location.clone(),
                stock_quantity: MEDICAL_QUANTITY.sample(rng),
                purchase_price: jitter_price(
                    rng,
                    device_type.base.purchase,
                    MEDICAL_JITTER.purchase,
                    PURCHASE_FLOOR,
                ),
                selling_price: jitter_price(
                    rng,
                    device_type.base.sale,
                    MEDICAL_JITTER.sale,
                    SALE_FLOOR,
                ),
                rental_price: jitter_price(
                    rng,
                    device_type.base.rental.unwrap_or(RENTAL_FLOOR),
                    MEDICAL_JITTER.rental,
                    RENTAL_FLOOR,
                ),
                technical_specs: format!(
                    "Appareil médical {} - Modèle {}",
                    device_type.name, model
                ),
                configuration: format!("Config standard {}", model),
                status,
                destination,
                requires_maintenance: rng.random_bool(0.5),
            }
        })
        .collect()
}
