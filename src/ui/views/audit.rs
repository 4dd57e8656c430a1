use std::path::Path;

use legajo::application::AuditResult;
use legajo::domain::entities::ReportEntry;
use legajo::domain::value_objects::Period;

use crate::ui::style::{Mark, Style};

pub fn render_audit_header(root: &Path, today: Period, style: Style) -> String {
    format!(
        "{} {} {}\n",
        style.heading("Auditing"),
        root.display(),
        style.dim(&format!("as of {}", today))
    )
}

fn render_section(title: &str, count: usize, style: Style) -> String {
    format!("\n{}\n", style.heading(&format!("{} ({})", title, count)))
}

fn render_entries(title: &str, mark: Mark, entries: &[ReportEntry], style: Style) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = render_section(title, entries.len(), style);
    for entry in entries {
        out.push_str(&format!(
            "  {} {} {}: {}\n",
            style.mark(mark),
            entry.client,
            style.dim(&format!("({})", entry.category)),
            entry.item
        ));
    }
    out
}

pub fn render_audit_report(result: &AuditResult, verbose: u8, style: Style) -> String {
    let report = &result.report;
    let mut out = String::new();

    out.push_str(&render_entries("Missing", Mark::Missing, report.missing(), style));
    out.push_str(&render_entries("Outdated", Mark::Outdated, report.outdated(), style));

    if !report.unclassified().is_empty() {
        out.push_str(&render_section("Unclassified", report.unclassified().len(), style));
        for client in report.unclassified() {
            out.push_str(&format!(
                "  {} {}\n",
                style.mark(Mark::Unclassified),
                client.display_name()
            ));
        }
    }

    if verbose > 0 {
        let compliant: Vec<_> = report.results().iter().filter(|r| r.is_compliant()).collect();
        if !compliant.is_empty() {
            out.push_str(&render_section("Compliant", compliant.len(), style));
            for r in compliant {
                out.push_str(&format!(
                    "  {} {}\n",
                    style.mark(Mark::Compliant),
                    r.client.display_name()
                ));
            }
        }
    }

    out
}

/// Verdict line, counts, delivery problems and where the CSV files went.
pub fn render_audit_summary(result: &AuditResult, style: Style) -> String {
    let report = &result.report;
    let flagged = report.results().iter().filter(|r| !r.is_compliant()).count();

    let verdict = if report.is_compliant() {
        style.verdict(
            Mark::Compliant,
            &format!("All {} clients compliant", report.client_count()),
        )
    } else {
        style.verdict(
            Mark::Outdated,
            &format!("Findings in {} of {} clients", flagged, report.client_count()),
        )
    };
    let mut out = format!("\n{}\n", verdict);

    out.push_str(&format!("  Missing: {}\n", report.missing().len()));
    out.push_str(&format!("  Outdated: {}\n", report.outdated().len()));
    if !report.unclassified().is_empty() {
        out.push_str(&format!("  Unclassified: {}\n", report.unclassified().len()));
    }
    for err in &result.delivery_errors {
        out.push_str(&format!("  {} {}\n", style.mark(Mark::Outdated), err));
    }

    if !result.written.is_empty() {
        let files: Vec<String> = result
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        out.push_str(&format!(
            "\n{} {}\n",
            style.mark(Mark::Hint),
            style.dim(&format!("Report written to {}", files.join(", ")))
        ));
    }
    if result.notified {
        out.push_str(&format!("{} Notification queued\n", style.mark(Mark::Compliant)));
    }
    out
}

/// Machine-readable audit outcome for `--json`.
pub fn audit_json(result: &AuditResult, today: Period) -> serde_json::Value {
    let report = &result.report;
    let unclassified: Vec<&str> = report
        .unclassified()
        .iter()
        .map(|c| c.display_name())
        .collect();

    serde_json::json!({
        "event": "audit",
        "today": today.to_string(),
        "generated_at": report.generated_at().to_rfc3339(),
        "clients": report.client_count(),
        "compliant": report.is_compliant(),
        "missing": report.missing(),
        "outdated": report.outdated(),
        "unclassified": unclassified,
        "written": result.written,
        "notified": result.notified,
        "delivery_errors": result.delivery_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use legajo::application::{AuditOptions, AuditUseCase};
    use legajo::config::Config;
    use legajo::domain::entities::RequirementCatalog;
    use legajo::domain::ports::{FixedClock, MemoryEnumerator};

    fn sample_result() -> AuditResult {
        let fs = MemoryEnumerator::new([
            "/clientes/Juan Perez 20-12345678-9/DNI.pdf",
            "/clientes/Juan Perez 20-12345678-9/CUIL.pdf",
            "/clientes/Juan Perez 20-12345678-9/GANANCIAS ENE 23.pdf",
            "/clientes/Juan Perez 20-12345678-9/BIENES MAR 24.pdf",
            "/clientes/Sin Patron/notas.txt",
        ]);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(now, Period::new(2024, 3).unwrap());
        AuditUseCase::new(fs, clock, RequirementCatalog::builtin(), Config::default())
            .execute(&AuditOptions::new("/clientes").with_report(false))
            .unwrap()
    }

    #[test]
    fn report_lists_findings_in_ascii() {
        let rendered = render_audit_report(&sample_result(), 0, Style::new(false, false));
        insta::assert_snapshot!(rendered.trim_start_matches('\n'), @r"
        Missing (1)
          [FAIL] Juan Perez 20-12345678-9 (Persona): Monotributo

        Outdated (1)
          [WARN] Juan Perez 20-12345678-9 (Persona): GANANCIAS ENE 23.pdf

        Unclassified (1)
          [ ] Sin Patron
        ");
    }

    #[test]
    fn summary_counts_findings() {
        let rendered = render_audit_summary(&sample_result(), Style::new(false, false));
        assert!(rendered.contains("[WARN] Findings in 1 of 1 clients"));
        assert!(rendered.contains("Missing: 1"));
        assert!(rendered.contains("Outdated: 1"));
        assert!(rendered.contains("Unclassified: 1"));
    }

    #[test]
    fn summary_lists_delivery_errors() {
        let mut result = sample_result();
        result.delivery_errors.push("report sink 'csv' failed: disk full".to_string());
        let rendered = render_audit_summary(&result, Style::new(false, false));
        assert!(rendered.contains("  [WARN] report sink 'csv' failed: disk full"));
    }

    #[test]
    fn header_names_root_and_period() {
        let rendered = render_audit_header(
            Path::new("/clientes"),
            Period::new(2024, 3).unwrap(),
            Style::new(false, true),
        );
        assert_eq!(rendered, "Auditing /clientes as of 2024-03\n");
    }

    #[test]
    fn json_carries_entries_and_flags() {
        let value = audit_json(&sample_result(), Period::new(2024, 3).unwrap());
        assert_eq!(value["event"], "audit");
        assert_eq!(value["today"], "2024-03");
        assert_eq!(value["compliant"], false);
        assert_eq!(value["missing"][0]["item"], "Monotributo");
        assert_eq!(value["missing"][0]["category"], "persona");
        assert_eq!(value["unclassified"][0], "Sin Patron");
    }
}
