//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::Category;
use crate::cli::commands::{
    catalog::CatalogArgs, completions::CompletionsArgs, generate::GenerateArgs,
    preview::PreviewArgs,
};

#[derive(Parser)]
#[command(name = "stockgen")]
#[command(author, version, about = "Inventory import fixture generator")]
#[command(long_about = "Generates randomized medical device, diagnostic device, accessory, and spare part records and writes them as CSV files for exercising inventory import screens.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate fixture files (all four categories by default)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Print sample records for one category without writing files
    Preview(PreviewArgs),

    /// Show the static item catalog (types, models, brands, prices)
    Catalog(CatalogArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Record category as a CLI value
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    MedicalDevices,
    DiagnosticDevices,
    Accessories,
    SpareParts,
}

impl CategoryArg {
    pub fn category(&self) -> Category {
        match self {
            CategoryArg::MedicalDevices => Category::MedicalDevice,
            CategoryArg::DiagnosticDevices => Category::DiagnosticDevice,
            CategoryArg::Accessories => Category::Accessory,
            CategoryArg::SpareParts => Category::SparePart,
        }
    }
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category())
    }
}
