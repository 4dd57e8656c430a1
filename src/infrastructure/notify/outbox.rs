//! Outbox notifier
//!
//! Drops an HTML summary plus a JSON envelope into a directory watched by
//! the office mail relay. The relay owns SMTP; this adapter only produces
//! the message.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::html::render_html_summary;
use crate::config::NotifyConfig;
use crate::domain::entities::ComplianceReport;
use crate::domain::ports::Notifier;
use crate::error::{LegajoError, LegajoResult};
use crate::infrastructure::fs::atomic_write;

/// Message envelope read by the relay
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    to: &'a [String],
    subject: String,
    html_body: String,
    attachments: &'a [PathBuf],
    compliant: bool,
    generated_at: String,
}

#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    outbox: PathBuf,
    recipients: Vec<String>,
    subject: String,
}

impl OutboxNotifier {
    pub fn new(outbox: impl Into<PathBuf>, recipients: Vec<String>, subject: impl Into<String>) -> Self {
        Self {
            outbox: outbox.into(),
            recipients,
            subject: subject.into(),
        }
    }

    /// Notifier for `config`; the outbox defaults to the hidden `<fallback>/.outbox`.
    pub fn from_config(config: &NotifyConfig, fallback: &Path) -> Self {
        let outbox = config
            .outbox
            .clone()
            .unwrap_or_else(|| fallback.join(".outbox"));
        Self::new(outbox, config.recipients.clone(), config.subject.clone())
    }

    pub fn outbox(&self) -> &Path {
        &self.outbox
    }

    fn failure(&self, message: impl Into<String>) -> LegajoError {
        LegajoError::Notification {
            channel: self.name().to_string(),
            message: message.into(),
        }
    }
}

impl Notifier for OutboxNotifier {
    fn name(&self) -> &str {
        "outbox"
    }

    fn notify(&self, report: &ComplianceReport, attachments: &[PathBuf]) -> LegajoResult<()> {
        if self.recipients.is_empty() {
            return Err(self.failure("no recipients configured"));
        }

        let stamp = report.generated_at().format("%Y%m%dT%H%M%SZ").to_string();
        let html_name = format!("legajo-{}.html", stamp);
        let html_path = self.outbox.join(&html_name);
        let envelope_path = self.outbox.join(format!("legajo-{}.json", stamp));

        let subject = if report.is_compliant() {
            self.subject.clone()
        } else {
            format!(
                "{} - {} faltantes, {} desactualizados",
                self.subject,
                report.missing().len(),
                report.outdated().len()
            )
        };

        let envelope = Envelope {
            to: &self.recipients,
            subject,
            html_body: html_name,
            attachments,
            compliant: report.is_compliant(),
            generated_at: report.generated_at().to_rfc3339(),
        };

        let html = render_html_summary(report);
        atomic_write(&html_path, html.as_bytes())
            .map_err(|e| self.failure(format!("{}: {}", html_path.display(), e)))?;

        let json = serde_json::to_vec_pretty(&envelope)?;
        atomic_write(&envelope_path, &json)
            .map_err(|e| self.failure(format!("{}: {}", envelope_path.display(), e)))?;

        info!(
            outbox = %self.outbox.display(),
            recipients = self.recipients.len(),
            "queued report notification"
        );
        Ok(())
    }
}
