use legajo::domain::entities::RequirementCatalog;
use legajo::domain::value_objects::Category;

use crate::ui::style::Style;

pub fn render_catalog(catalog: &RequirementCatalog, categories: &[Category], style: Style) -> String {
    let mut out = format!(
        "{} {}\n",
        style.heading("Requirement catalog"),
        style.dim(&format!(
            "(balance families: {})",
            catalog.balance_families().join(", ")
        ))
    );

    for category in categories {
        out.push_str(&format!("\n{}\n", style.heading(category.as_str())));
        for def in catalog.requirements(*category) {
            out.push_str(&format!(
                "  {} {} {}\n",
                def.key,
                style.dim(&format!("[{}]", def.match_token)),
                style.accent(&def.cycle.to_string())
            ));
        }
    }
    out
}

pub fn catalog_json(catalog: &RequirementCatalog, categories: &[Category]) -> serde_json::Value {
    let mut entries = serde_json::Map::new();
    for category in categories {
        entries.insert(
            category.as_str().to_lowercase(),
            serde_json::json!(catalog.requirements(*category)),
        );
    }
    serde_json::json!({
        "event": "catalog",
        "balance_families": catalog.balance_families(),
        "categories": entries,
    })
}
