use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use legajo::application::{AuditOptions, AuditUseCase};
use legajo::config::{self, Config};
use legajo::domain::ports::{Clock, FixedClock};
use legajo::domain::value_objects::Period;
use legajo::infrastructure::{CsvReportSink, OutboxNotifier, SystemClock, WalkEnumerator};
use tracing::debug;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::audit::{
    audit_json, render_audit_header, render_audit_report, render_audit_summary,
};

pub struct AuditArgs {
    pub root: PathBuf,
    pub today: Option<Period>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_report: bool,
    pub notify: bool,
    pub fail_on_findings: bool,
}

pub fn cmd_audit(args: AuditArgs, json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    if !args.root.is_dir() {
        anyhow::bail!("client root not found: {}", args.root.display());
    }

    let loaded = config::resolve(args.config.as_deref(), Some(&args.root))
        .context("failed to load configuration")?;
    super::report_config_warnings(&loaded.warnings);
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "using configuration file");
    }

    let ui = UiContext::new(json, verbose, color, &loaded.config);

    let compliant = match args.today {
        Some(period) => run(&args, loaded.config, FixedClock::new(Utc::now(), period), &ui)?,
        None => run(&args, loaded.config, SystemClock, &ui)?,
    };

    if args.fail_on_findings && !compliant {
        std::process::exit(1);
    }
    Ok(())
}

fn run<C: Clock>(args: &AuditArgs, config: Config, clock: C, ui: &UiContext) -> Result<bool> {
    let today = clock.today();
    let catalog = config
        .requirement_catalog()
        .context("invalid requirement catalog")?;

    let enumerator = WalkEnumerator::new().include_hidden(config.scan.include_hidden);
    let output_dir = report_dir(args, &config);
    let sink = CsvReportSink::from_config(&config.report, output_dir);
    let notifier = OutboxNotifier::from_config(&config.notify, &args.root);

    let options = AuditOptions::new(&args.root)
        .with_report(config.report.enabled && !args.no_report)
        .with_notify(args.notify || config.notify.enabled);

    let use_case = AuditUseCase::new(enumerator, clock, catalog, config)
        .with_sink(Box::new(sink))
        .with_notifier(Box::new(notifier));

    if !ui.json {
        print!("{}", render_audit_header(&args.root, today, ui.style()));
    }

    let result = use_case
        .execute(&options)
        .with_context(|| format!("audit of {} failed", args.root.display()))?;

    if ui.json {
        crate::ui::json::emit(audit_json(&result, today))?;
    } else {
        print!("{}", render_audit_report(&result, ui.verbose, ui.style()));
        print!("{}", render_audit_summary(&result, ui.style()));
    }

    Ok(result.is_compliant())
}

/// CLI flag, then configuration, then the audited root.
fn report_dir(args: &AuditArgs, config: &Config) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.report.output_dir.clone())
        .unwrap_or_else(|| args.root.clone())
}
