pub mod audit;
pub mod catalog;
pub mod inspect;

use legajo::config::ConfigWarning;
use tracing::warn;

/// Surface unknown configuration keys without failing the command.
pub(crate) fn report_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(s) => warn!("unknown config key '{}' in {} (did you mean '{}'?)", w.key, location, s),
            None => warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}
