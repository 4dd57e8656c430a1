//! Client Category Value Object
//!
//! The category decides which requirement list a client folder is audited
//! against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category a client folder is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Individual taxpayer (CUIL-shaped folder name)
    Persona,
    /// Small/medium enterprise ("PYME" in the folder name)
    Pyme,
    /// Legal entity (11-digit CUIT in the folder name)
    Empresa,
    /// No classification rule matched
    Unknown,
}

impl Category {
    /// Categories that carry a requirement list, in catalog order.
    pub const AUDITED: [Category; 3] = [Category::Persona, Category::Pyme, Category::Empresa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Persona => "Persona",
            Category::Pyme => "Pyme",
            Category::Empresa => "Empresa",
            Category::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "persona" => Ok(Category::Persona),
            "pyme" => Ok(Category::Pyme),
            "empresa" => Ok(Category::Empresa),
            other => Err(format!(
                "unknown category '{}' (expected persona, pyme or empresa)",
                other
            )),
        }
    }
}
