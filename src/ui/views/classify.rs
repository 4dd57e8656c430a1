use legajo::domain::policies::{classify, extract_period, leading_token};
use legajo::domain::value_objects::Category;

use crate::ui::style::{Mark, Style};

pub fn render_classification(names: &[String], style: Style) -> String {
    let mut out = String::new();
    for name in names {
        let category = classify(name);
        let (mark, label) = if category.is_known() {
            (Mark::Compliant, style.accent(category.as_str()))
        } else {
            (Mark::Unclassified, style.dim(category.as_str()))
        };
        out.push_str(&format!("{} {}: {}\n", style.mark(mark), name, label));
    }
    out
}

pub fn classification_json(names: &[String]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            let category: Category = classify(name);
            serde_json::json!({ "name": name, "category": category })
        })
        .collect();
    serde_json::json!({ "event": "classify", "items": items })
}

pub fn render_periods(stems: &[String], style: Style) -> String {
    let mut out = String::new();
    for stem in stems {
        let (mark, period) = match extract_period(stem) {
            Some(period) => (Mark::Compliant, style.accent(&period.to_string())),
            None => (Mark::Unclassified, style.dim("no period")),
        };
        out.push_str(&format!(
            "{} {}: {} {}\n",
            style.mark(mark),
            stem,
            leading_token(stem),
            period
        ));
    }
    out
}

pub fn periods_json(stems: &[String]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = stems
        .iter()
        .map(|stem| {
            serde_json::json!({
                "stem": stem,
                "token": leading_token(stem),
                "period": extract_period(stem).map(|p| p.to_string()),
            })
        })
        .collect();
    serde_json::json!({ "event": "period", "items": items })
}
