//! Legajo CLI - client document folder compliance auditor
//!
//! Usage: legajo <COMMAND>
//!
//! Commands:
//!   audit     Audit every client folder under a root directory
//!   classify  Show the category of client folder names
//!   period    Show the period parsed from file name stems
//!   catalog   List the effective requirement catalog

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, ColorWhen, Commands};
use commands::audit::{cmd_audit, AuditArgs};
use commands::catalog::cmd_catalog;
use commands::inspect::{cmd_classify, cmd_period};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_color = !matches!(cli.color, Some(ColorWhen::Never))
        && std::env::var_os("NO_COLOR").is_none();
    legajo::logging::init_logging(cli.verbose, log_color);

    let json = cli.json;
    let verbose = cli.verbose;
    let color = cli.color;

    match cli.command {
        Commands::Audit {
            root,
            today,
            config,
            output,
            no_report,
            notify,
            fail_on_findings,
        } => cmd_audit(
            AuditArgs {
                root,
                today,
                config,
                output,
                no_report,
                notify,
                fail_on_findings,
            },
            json,
            verbose,
            color,
        ),
        Commands::Classify { names } => cmd_classify(&names, json, verbose, color),
        Commands::Period { stems } => cmd_period(&stems, json, verbose, color),
        Commands::Catalog { category, config } => {
            cmd_catalog(category, config, json, verbose, color)
        }
    }
}
