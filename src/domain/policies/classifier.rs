//! Client folder classification.
//!
//! Folder names are free text typed by staff, so several patterns can appear
//! in one name. Rules are evaluated in table order and the first match wins.
//!
//! This is a pure domain policy - no I/O operations.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::value_objects::Category;

lazy_static! {
    /// Exactly eleven consecutive digits (a CUIT written without dashes).
    static ref CUIT_PATTERN: Regex = Regex::new(r"(?:^|\D)\d{11}(?:\D|$)").unwrap();

    /// `DD-DDDDDDDD-D` (a CUIL).
    static ref CUIL_PATTERN: Regex = Regex::new(r"(?:^|\D)\d{2}-\d{8}-\d(?:\D|$)").unwrap();
}

type Rule = (fn(&str) -> bool, Category);

/// Classification rules in priority order.
const RULES: [Rule; 3] = [
    (has_cuit, Category::Empresa),
    (has_pyme_marker, Category::Pyme),
    (has_cuil, Category::Persona),
];

/// Classify a client folder name.
pub fn classify(folder_name: &str) -> Category {
    RULES
        .iter()
        .find(|(applies, _)| applies(folder_name))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Unknown)
}

fn has_cuit(name: &str) -> bool {
    CUIT_PATTERN.is_match(name)
}

fn has_pyme_marker(name: &str) -> bool {
    name.to_uppercase().contains("PYME")
}

fn has_cuil(name: &str) -> bool {
    CUIL_PATTERN.is_match(name)
}
