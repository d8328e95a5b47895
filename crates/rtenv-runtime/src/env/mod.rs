//! Child-process environment for a resolved runtime.
//!
//! `builder` takes a captured environment and returns a copy that runs the
//! selected runtime first on `PATH` and cannot see gem locations from the
//! invoking shell.

pub mod builder;

pub use builder::{build_environment, prepend_search_path};

/// Redirects gem installation to a foreign directory.
pub const GEM_HOME: &str = "GEM_HOME";

/// Extra gem lookup directories.
pub const GEM_PATH: &str = "GEM_PATH";

/// Executable search path.
pub const PATH: &str = "PATH";

/// Variables always removed from a runtime's environment.
pub const SANITIZED_VARS: &[&str] = &[GEM_HOME, GEM_PATH];

/// Separator between `PATH` entries.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';

#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';
