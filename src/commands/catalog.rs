use std::path::PathBuf;

use anyhow::{Context, Result};
use legajo::config;
use legajo::domain::value_objects::Category;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::catalog::{catalog_json, render_catalog};

pub fn cmd_catalog(
    category: Option<Category>,
    config_path: Option<PathBuf>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let loaded = config::resolve(config_path.as_deref(), cwd.as_deref())
        .context("failed to load configuration")?;
    super::report_config_warnings(&loaded.warnings);

    let catalog = loaded
        .config
        .requirement_catalog()
        .context("invalid requirement catalog")?;
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::AUDITED.to_vec(),
    };

    let ui = UiContext::new(json, verbose, color, &loaded.config);
    if ui.json {
        crate::ui::json::emit(catalog_json(&catalog, &categories))?;
    } else {
        print!("{}", render_catalog(&catalog, &categories, ui.style()));
    }
    Ok(())
}
