//! Filesystem capability for runtime discovery.
//!
//! The locator never touches the disk directly; it is handed a [`FileSystem`]
//! at construction. [`LocalFileSystem`] talks to the real disk,
//! [`MemoryFileSystem`] keeps everything in memory for tests and embedders.

mod local;
mod memory;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a [`FileSystem`].
#[derive(Debug, Error)]
pub enum FsError {
    /// A required path does not exist. Carries the caller's message.
    #[error("{0}")]
    PathNotFound(String),

    /// The path could not be inspected or enumerated.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to determine the current user's home directory")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, FsError>;

/// Read-only view of the filesystem needed to discover runtimes.
///
/// Implementations must be safe to share between threads; the locator only
/// ever reads through this trait.
pub trait FileSystem: Send + Sync {
    /// Home directory of the current user.
    fn user_home(&self) -> Result<PathBuf>;

    /// `Ok(false)` when the path is absent; `Err` only when existence could
    /// not be determined at all.
    fn path_exists(&self, path: &Path) -> Result<bool>;

    /// Names (not full paths) of the immediate subdirectories of `dir`.
    fn list_dir_names(&self, dir: &Path) -> Result<Vec<String>>;

    /// Fail with [`FsError::PathNotFound`] carrying `message` when `path` is absent.
    fn assert_path_exists(&self, path: &Path, message: &str) -> Result<()> {
        if self.path_exists(path)? {
            Ok(())
        } else {
            Err(FsError::PathNotFound(message.to_string()))
        }
    }
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn user_home(&self) -> Result<PathBuf> {
        (**self).user_home()
    }

    fn path_exists(&self, path: &Path) -> Result<bool> {
        (**self).path_exists(path)
    }

    fn list_dir_names(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list_dir_names(dir)
    }

    fn assert_path_exists(&self, path: &Path, message: &str) -> Result<()> {
        (**self).assert_path_exists(path, message)
    }
}
