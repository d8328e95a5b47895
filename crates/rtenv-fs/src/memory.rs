use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::{FileSystem, FsError, Result};

/// In-memory [`FileSystem`].
///
/// Existence and directory listings are seeded independently, so a listing
/// can name versions whose executables are absent. State sits behind a lock;
/// callers can flip existence while a locator holds a shared handle.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    home: Option<PathBuf>,
    existing: RwLock<BTreeSet<PathBuf>>,
    listings: RwLock<BTreeMap<PathBuf, Vec<String>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            ..Self::default()
        }
    }

    /// Mark `path` as present (`true`) or absent (`false`).
    pub fn set_exists(&self, path: impl Into<PathBuf>, exists: bool) {
        let path = path.into();
        let mut existing = self.existing.write().unwrap_or_else(|e| e.into_inner());
        if exists {
            existing.insert(path);
        } else {
            existing.remove(&path);
        }
    }

    /// Make `dir` listable with the given subdirectory names.
    pub fn set_dir_names<I, S>(&self, dir: impl Into<PathBuf>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut listings = self.listings.write().unwrap_or_else(|e| e.into_inner());
        listings.insert(dir.into(), names.into_iter().map(Into::into).collect());
    }
}

impl FileSystem for MemoryFileSystem {
    fn user_home(&self) -> Result<PathBuf> {
        self.home.clone().ok_or(FsError::HomeNotFound)
    }

    fn path_exists(&self, path: &Path) -> Result<bool> {
        let existing = self.existing.read().unwrap_or_else(|e| e.into_inner());
        Ok(existing.contains(path))
    }

    fn list_dir_names(&self, dir: &Path) -> Result<Vec<String>> {
        let listings = self.listings.read().unwrap_or_else(|e| e.into_inner());
        listings.get(dir).cloned().ok_or_else(|| FsError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "directory not found"),
        })
    }
}
