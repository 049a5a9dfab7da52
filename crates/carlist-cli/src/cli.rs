//! CLI definition using clap

use carlist_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carlist")]
#[command(version)]
#[command(about = "Filter a sample vehicle catalog by brand, model age, and price")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the three configured demo queries (default)
    Demo,

    /// Print the whole sample catalog
    List,

    /// List vehicles of a brand (exact, case-sensitive)
    Brand {
        /// Brand name (e.g., "Aston Martin")
        brand: String,
    },

    /// List vehicles of a model older than N years
    Older {
        /// Model name (e.g., "Cayman")
        model: String,

        /// Age in years the vehicle must exceed
        #[arg(long, short = 'y')]
        years: i32,
    },

    /// List vehicles made in a year and priced above a threshold
    Priced {
        /// Production year
        #[arg(long)]
        year: i32,

        /// Price the vehicle must exceed
        #[arg(long)]
        above: i64,
    },

    /// Check a registration number against the alphanumeric rule
    CheckPlate {
        /// Registration number (e.g., "1326ADA")
        value: String,
    },

    /// Show configuration
    Config {
        /// Write the current configuration to the config file
        #[arg(long)]
        save: bool,
    },
}
