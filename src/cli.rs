//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use legajo::domain::value_objects::{Category, Period};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Legajo - client document folder compliance auditor
#[derive(Parser, Debug)]
#[command(name = "legajo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts (JSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit every client folder under ROOT
    Audit {
        /// Directory holding one subfolder per client
        root: PathBuf,

        /// Evaluate staleness as of this month (YYYY-MM) instead of today
        #[arg(long, value_name = "YYYY-MM")]
        today: Option<Period>,

        /// Configuration file (overrides ROOT/.legajo.toml and the user config)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory for the CSV report files
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Do not write the CSV report files
        #[arg(long)]
        no_report: bool,

        /// Queue an e-mail summary in the outbox
        #[arg(long)]
        notify: bool,

        /// Exit with status 1 when anything is missing or outdated
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Show which category a client folder name falls into
    Classify {
        /// Folder names to classify
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show the leading token and period parsed from file name stems
    Period {
        /// File name stems (without extension)
        #[arg(required = true)]
        stems: Vec<String>,
    },

    /// List the effective requirement catalog
    Catalog {
        /// Only this category (persona, pyme, empresa)
        #[arg(long)]
        category: Option<Category>,

        /// Configuration file holding catalog overrides
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
