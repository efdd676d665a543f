//! `stockgen catalog` command - show the static item catalog

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::catalog::{
    ACCESSORY_BRANDS, ACCESSORY_TYPES, DIAGNOSTIC_BRANDS, DIAGNOSTIC_TYPES, MEDICAL_BRAND,
    MEDICAL_TYPES, SPARE_PART_BRANDS, SPARE_PART_FAMILIES,
};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {}

pub fn run(_args: CatalogArgs, _global: &GlobalOpts) -> Result<()> {
    println!(
        "{} (brand: {})",
        style("Medical devices").bold(),
        MEDICAL_BRAND
    );
    let mut builder = Builder::default();
    builder.push_record(["TYPE", "MODELS", "PURCHASE", "SALE", "RENTAL"]);
    for t in MEDICAL_TYPES {
        builder.push_record([
            t.name.to_string(),
            t.models.join(", "),
            t.base.purchase.to_string(),
            t.base.sale.to_string(),
            t.base.rental.map_or("-".to_string(), |r| r.to_string()),
        ]);
    }
    println!("{}", builder.build().with(Style::markdown()));

    println!();
    println!(
        "{} (brands: {})",
        style("Diagnostic devices").bold(),
        DIAGNOSTIC_BRANDS.join(", ")
    );
    let mut builder = Builder::default();
    builder.push_record(["TYPE", "MODELS", "PURCHASE", "SALE", "PARAMETERS"]);
    for t in DIAGNOSTIC_TYPES {
        let parameters: Vec<String> = t
            .parameters
            .iter()
            .map(|p| format!("{} [{}]", p.name, p.unit))
            .collect();
        builder.push_record([
            t.name.to_string(),
            t.models.join(", "),
            t.base.purchase.to_string(),
            t.base.sale.to_string(),
            parameters.join(", "),
        ]);
    }
    println!("{}", builder.build().with(Style::markdown()));

    println!();
    println!(
        "{} (brands: {})",
        style("Accessories").bold(),
        ACCESSORY_BRANDS.join(", ")
    );
    let mut builder = Builder::default();
    builder.push_record(["TYPE", "SUB-TYPES", "PURCHASE", "SALE"]);
    for t in ACCESSORY_TYPES {
        builder.push_record([
            t.name.to_string(),
            t.sub_types.join(", "),
            t.base.purchase.to_string(),
            t.base.sale.to_string(),
        ]);
    }
    println!("{}", builder.build().with(Style::markdown()));

    println!();
    println!(
        "{} (brands: {})",
        style("Spare parts").bold(),
        SPARE_PART_BRANDS.join(", ")
    );
    let mut builder = Builder::default();
    builder.push_record(["FAMILY", "PART TYPES", "PURCHASE", "SALE"]);
    for f in SPARE_PART_FAMILIES {
        builder.push_record([
            f.name.to_string(),
            f.part_types.join(", "),
            f.base.purchase.to_string(),
            f.base.sale.to_string(),
        ]);
    }
    println!("{}", builder.build().with(Style::markdown()));

    Ok(())
}
