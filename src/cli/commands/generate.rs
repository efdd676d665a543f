//! `stockgen generate` command - write the fixture files

use chrono::{Datelike, Local};
use console::style;
use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::cli::helpers::QuantityStats;
use crate::cli::{CategoryArg, GlobalOpts};
use crate::core::Config;
use crate::export::{fixture_path, write_csv};
use crate::records::{self, GenContext};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for the fixture files
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,

    /// Number of medical device records
    #[arg(long)]
    pub medical_devices: Option<usize>,

    /// Number of diagnostic device records
    #[arg(long)]
    pub diagnostic_devices: Option<usize>,

    /// Number of accessory records
    #[arg(long)]
    pub accessories: Option<usize>,

    /// Number of spare part records
    #[arg(long)]
    pub spare_parts: Option<usize>,

    /// Stock location label stamped on every record
    #[arg(long, short = 'l')]
    pub stock_location: Option<String>,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only generate one category
    #[arg(long, value_enum)]
    pub only: Option<CategoryArg>,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir());
    let stock_location = args
        .stock_location
        .unwrap_or_else(|| config.stock_location());

    std::fs::create_dir_all(&out_dir).into_diagnostic()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let ctx = GenContext::new(stock_location.clone(), Local::now().year());

    let wanted =
        |category: Category| args.only.map_or(true, |only| only.category() == category);

    let mut files_written = 0usize;
    let mut records_written = 0usize;

    if wanted(Category::MedicalDevice) {
        let count = args
            .medical_devices
            .unwrap_or_else(|| config.medical_devices());
        let batch = records::medical::generate(&mut rng, &ctx, count);
        let path = fixture_path(&out_dir, Category::MedicalDevice);
        write_csv(&path, &batch).into_diagnostic()?;

        if !global.quiet {
            print_file_line(&path, batch.len(), None);
            if global.verbose {
                print_distribution(batch.iter().map(|d| d.name.as_str()));
            }
        }
        files_written += 1;
        records_written += batch.len();
    }

    if wanted(Category::DiagnosticDevice) {
        let count = args
            .diagnostic_devices
            .unwrap_or_else(|| config.diagnostic_devices());
        let batch = records::diagnostic::generate(&mut rng, &ctx, count);
        let path = fixture_path(&out_dir, Category::DiagnosticDevice);
        write_csv(&path, &batch).into_diagnostic()?;

        if !global.quiet {
            print_file_line(&path, batch.len(), None);
            if global.verbose {
                print_distribution(batch.iter().map(|d| d.name.as_str()));
            }
        }
        files_written += 1;
        records_written += batch.len();
    }

    if wanted(Category::Accessory) {
        let count = args.accessories.unwrap_or_else(|| config.accessories());
        let batch = records::accessory::generate(&mut rng, &ctx, count);
        let path = fixture_path(&out_dir, Category::Accessory);
        write_csv(&path, &batch).into_diagnostic()?;

        if !global.quiet {
            let quantities: Vec<u32> = batch.iter().map(|a| a.stock_quantity).collect();
            print_file_line(&path, batch.len(), QuantityStats::from_quantities(&quantities));
            if global.verbose {
                print_distribution(batch.iter().map(|a| a.name.as_str()));
            }
        }
        files_written += 1;
        records_written += batch.len();
    }

    if wanted(Category::SparePart) {
        let count = args.spare_parts.unwrap_or_else(|| config.spare_parts());
        let batch = records::spare_part::generate(&mut rng, &ctx, count);
        let path = fixture_path(&out_dir, Category::SparePart);
        write_csv(&path, &batch).into_diagnostic()?;

        if !global.quiet {
            let quantities: Vec<u32> = batch.iter().map(|p| p.stock_quantity).collect();
            print_file_line(&path, batch.len(), QuantityStats::from_quantities(&quantities));
            if global.verbose {
                print_distribution(batch.iter().map(|p| p.name.as_str()));
            }
        }
        files_written += 1;
        records_written += batch.len();
    }

    if !global.quiet {
        println!();
        println!(
            "{} {} file(s) written to {}, {} records, stock location {}",
            style("✓").green(),
            files_written,
            style(out_dir.display()).cyan(),
            style(records_written).cyan(),
            style(format!("'{}'", stock_location)).cyan()
        );
    }
    Ok(())
}

fn print_file_line(path: &Path, rows: usize, stats: Option<QuantityStats>) {
    println!(
        "{} Wrote {} ({} records)",
        style("✓").green(),
        style(path.display()).cyan(),
        rows
    );
    if let Some(stats) = stats {
        println!(
            "  stock quantity: total {}, mean {:.1}, min/max {}/{}",
            stats.total, stats.mean, stats.min, stats.max
        );
    }
}

fn print_distribution<'a>(names: impl Iterator<Item = &'a str>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }
    for (name, count) in counts {
        println!("  {:>4} × {}", count, name);
    }
}
