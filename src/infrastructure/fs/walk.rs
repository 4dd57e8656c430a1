//! Local disk enumerator
//!
//! Implements the FileEnumerator port with `ignore`'s directory walker.
//! VCS ignore files are not honoured: every document in a client folder
//! counts, whether or not someone listed it in a `.gitignore`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::FileEnumerator;
use crate::error::{LegajoError, LegajoResult};

/// Walks the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkEnumerator {
    include_hidden: bool,
}

impl WalkEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }
}

impl FileEnumerator for WalkEnumerator {
    fn list_files(&self, root: &Path) -> LegajoResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(LegajoError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .hidden(!self.include_hidden)
            .follow_links(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| LegajoError::Enumeration {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn list_client_dirs(&self, root: &Path) -> LegajoResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(LegajoError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let enumeration_error = |e: std::io::Error| LegajoError::Enumeration {
            path: root.to_path_buf(),
            message: e.to_string(),
        };

        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(root).map_err(enumeration_error)? {
            let entry = entry.map_err(enumeration_error)?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));
            if hidden && !self.include_hidden {
                continue;
            }
            dirs.push(path);
        }
        dirs.sort();
        Ok(dirs)
    }
}
