//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalint: schema validation for bibliographic catalog sheets
#[derive(Parser)]
#[command(name = "catalint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one sheet file against its schema
    Check {
        /// Path to the sheet file (comma separated, one record per line)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Sheet the file belongs to (catalog, authors, publishers, places)
        #[arg(short, long)]
        sheet: String,

        /// SPDX license list (JSON array of ids or SPDX licenses.json)
        #[arg(long, value_name = "JSON")]
        licenses: Option<PathBuf>,

        /// File of accepted language-tag patterns, one regex per line
        #[arg(long, value_name = "FILE")]
        language_patterns: Option<PathBuf>,

        /// The first row is a header naming the sheet's fields
        #[arg(long)]
        header: bool,

        /// Number of validation threads
        #[arg(short, long, default_value = "1")]
        threads: usize,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the field rules of one or all sheets
    Schema {
        /// Sheet to show (default: all)
        #[arg(value_name = "SHEET")]
        sheet: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
