//! FileEnumerator port - recursive listing of regular files
//!
//! The engine never walks the disk itself; it receives the flat file list
//! of each client folder through this trait.

use std::path::{Path, PathBuf};

use crate::error::LegajoResult;

/// Lists every regular file under a directory
///
/// Implementations:
/// - `WalkEnumerator` - local disk walk (infrastructure)
/// - `MemoryEnumerator` - fixed path list for tests
pub trait FileEnumerator {
    /// Recursive, regular files only, order unspecified.
    ///
    /// An unreadable or missing `root` is an error; callers abort the run.
    fn list_files(&self, root: &Path) -> LegajoResult<Vec<PathBuf>>;

    /// Immediate subdirectories of `root` (one per client).
    fn list_client_dirs(&self, root: &Path) -> LegajoResult<Vec<PathBuf>>;
}

/// In-memory enumerator backed by a fixed list of file paths
#[derive(Debug, Clone, Default)]
pub struct MemoryEnumerator {
    files: Vec<PathBuf>,
}

impl MemoryEnumerator {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileEnumerator for MemoryEnumerator {
    fn list_files(&self, root: &Path) -> LegajoResult<Vec<PathBuf>> {
        Ok(self
            .files
            .iter()
            .filter(|f| f.starts_with(root) && f.as_path() != root)
            .cloned()
            .collect())
    }

    fn list_client_dirs(&self, root: &Path) -> LegajoResult<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = self
            .files
            .iter()
            .filter_map(|f| {
                let rel = f.strip_prefix(root).ok()?;
                let mut parts = rel.components();
                let first = parts.next()?;
                // A file directly under the root is not a client folder.
                parts.next()?;
                Some(root.join(first))
            })
            .collect();
        dirs.sort();
        dirs.dedup();
        Ok(dirs)
    }
}
