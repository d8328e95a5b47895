use rtenv_fs::FsError;
use thiserror::Error;

/// Errors returned by [`crate::RuntimeLocator`].
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("Invalid runtime identifier '{0}': version must be a single directory name")]
    InvalidIdentifier(String),
}

impl LocatorError {
    /// True when the runtime (or a required directory) is simply not there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(FsError::PathNotFound(_)))
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
