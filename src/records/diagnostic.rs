//! Diagnostic device records - measurement devices with clinical ranges

use rand::Rng;
use serde::Serialize;

use crate::catalog::{
    DIAGNOSTIC_BRANDS, DIAGNOSTIC_JITTER, DIAGNOSTIC_TYPES, PURCHASE_FLOOR, SALE_FLOOR,
};
use crate::core::serial::{brand_prefix, serial_number};
use crate::records::{jitter_price, pick, GenContext, ItemStatus};

/// One diagnostic device row as the import dialog expects it
///
/// Diagnostic devices are registered per-unit, so there is no stock
/// quantity column; instead each row carries the measurement parameters
/// the device reports, as a JSON array.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticDevice {
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

    #[serde(rename = "Purchase Price")]
    pub purchase_price: i64,

    #[serde(rename = "Selling Price")]
    pub selling_price: i64,

    #[serde(rename = "Technical Specs")]
    pub technical_specs: String,

    #[serde(rename = "Configuration")]
    pub configuration: String,

    #[serde(rename = "Status")]
    pub status: ItemStatus,

    #[serde(rename = "Parameters")]
    pub parameters: String,
}

/// Generate a batch of `count` diagnostic devices
pub fn generate(rng: &mut impl Rng, ctx: &GenContext, count: usize) -> Vec<DiagnosticDevice> {
    (0..count)
        .map(|i| {
            let device_type = pick(rng, DIAGNOSTIC_TYPES);
            let brand = *pick(rng, DIAGNOSTIC_BRANDS);
            let model = *pick(rng, device_type.models);

            DiagnosticDevice {
                name: device_type.name.to_string(),
                record_type: "DIAGNOSTIC_DEVICE",
                brand,
                model,
                serial_number: serial_number(&brand_prefix(brand), ctx.year, i),
                stock_location: ctx.stock_location.clone(),
                purchase_price: jitter_price(
                    rng,
                    device_type.base.purchase,
                    DIAGNOSTIC_JITTER.purchase,
                    PURCHASE_FLOOR,
                ),
                selling_price: jitter_price(
                    rng,
                    device_type.base.sale,
                    DIAGNOSTIC_JITTER.sale,
                    SALE_FLOOR,
                ),
                technical_specs: format!(
                    "Appareil de diagnostic {} - {} {}",
                    device_type.name, brand, model
                ),
                configuration: format!("Config {}", model),
                status: ItemStatus::Active,
                // parameter tables are 'static and scalar; serialization cannot fail
                parameters: serde_json::to_string(device_type.parameters)
                    .expect("parameter tables serialize to JSON"),
            }
        })
        .collect()
}
