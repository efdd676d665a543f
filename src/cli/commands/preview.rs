//! `stockgen preview` command - sample records without writing files

use chrono::{Datelike, Local};
use console::style;
use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::{CategoryArg, GlobalOpts};
use crate::core::Config;
use crate::export::tabulate;
use crate::records::{self, GenContext};

/// Longest cell shown before truncation; JSON parameter lists would
/// otherwise swallow the terminal
const MAX_CELL: usize = 40;

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// Category to sample
    #[arg(value_enum)]
    pub category: CategoryArg,

    /// Number of sample records
    #[arg(long, short = 'n', default_value_t = 5)]
    pub count: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stock location label stamped on every record
    #[arg(long, short = 'l')]
    pub stock_location: Option<String>,
}

pub fn run(args: PreviewArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let stock_location = args
        .stock_location
        .unwrap_or_else(|| config.stock_location());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let ctx = GenContext::new(stock_location, Local::now().year());

    let (headers, rows) = match args.category {
        CategoryArg::MedicalDevices => {
            tabulate(&records::medical::generate(&mut rng, &ctx, args.count))
        }
        CategoryArg::DiagnosticDevices => {
            tabulate(&records::diagnostic::generate(&mut rng, &ctx, args.count))
        }
        CategoryArg::Accessories => {
            tabulate(&records::accessory::generate(&mut rng, &ctx, args.count))
        }
        CategoryArg::SpareParts => {
            tabulate(&records::spare_part::generate(&mut rng, &ctx, args.count))
        }
    }
    .into_diagnostic()?;

    if rows.is_empty() {
        if !global.quiet {
            println!("0 {} record(s)", args.category);
        }
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in &rows {
        builder.push_record(row.iter().map(|cell| truncate_str(cell, MAX_CELL)));
    }
    println!("{}", builder.build().with(Style::markdown()));

    if !global.quiet {
        println!();
        println!(
            "{} sample {} record(s), nothing written",
            style(rows.len()).cyan(),
            args.category
        );
    }
    Ok(())
}
