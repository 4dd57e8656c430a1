//! Client Folder Entity

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::policies::classify;
use crate::domain::value_objects::Category;

/// One top-level subfolder of the audited root, classified once on creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientFolder {
    path: PathBuf,
    display_name: String,
    category: Category,
}

impl ClientFolder {
    /// Build a client folder from its path, classifying the folder name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let category = classify(&display_name);
        Self {
            path,
            display_name,
            category,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
