//! `classify` and `period`: run a single rule over names given on the command line

use anyhow::Result;
use legajo::config::Config;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::classify::{
    classification_json, periods_json, render_classification, render_periods,
};

pub fn cmd_classify(names: &[String], json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let ui = UiContext::new(json, verbose, color, &Config::default());
    if ui.json {
        crate::ui::json::emit(classification_json(names))?;
    } else {
        print!("{}", render_classification(names, ui.style()));
    }
    Ok(())
}

pub fn cmd_period(stems: &[String], json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let ui = UiContext::new(json, verbose, color, &Config::default());
    if ui.json {
        crate::ui::json::emit(periods_json(stems))?;
    } else {
        print!("{}", render_periods(stems, ui.style()));
    }
    Ok(())
}
