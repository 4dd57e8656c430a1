//! Short HTML summary used as the notification body

use std::fmt::Write;

use crate::domain::entities::ComplianceReport;

/// Render the e-mail body for a report.
pub fn render_html_summary(report: &ComplianceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<html><body>");
    let _ = writeln!(out, "<h2>Estatus de legajos</h2>");
    let _ = writeln!(
        out,
        "<p>Generado: {}</p>",
        report.generated_at().format("%Y-%m-%d %H:%M UTC")
    );

    if report.is_compliant() {
        let _ = writeln!(
            out,
            "<p>Todos los legajos ({}) est&aacute;n completos y actualizados.</p>",
            report.client_count()
        );
    } else {
        let _ = writeln!(
            out,
            "<p>{} faltantes y {} desactualizados en {} legajos.</p>",
            report.missing().len(),
            report.outdated().len(),
            report.client_count()
        );
        let _ = writeln!(out, "<ul>");
        for result in report.results().iter().filter(|r| !r.is_compliant()) {
            let _ = writeln!(
                out,
                "<li>{} ({}): {} faltantes, {} desactualizados</li>",
                escape(result.client.display_name()),
                result.client.category(),
                result.missing.len(),
                result.outdated.len()
            );
        }
        let _ = writeln!(out, "</ul>");
        let _ = writeln!(out, "<p>El detalle completo va adjunto.</p>");
    }

    if !report.unclassified().is_empty() {
        let _ = writeln!(
            out,
            "<p>Carpetas sin clasificar: {}</p>",
            report.unclassified().len()
        );
    }

    let _ = writeln!(out, "</body></html>");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
