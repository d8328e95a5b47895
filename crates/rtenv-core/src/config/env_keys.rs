//! Environment variable keys read by rtenv.
//!
//! Primary names use the `RTENV_*` prefix; rbenv's own variables are accepted
//! as aliases where they mean the same thing.

/// Installation root and layout
pub mod locator {
    pub const RTENV_ROOT: &str = "RTENV_ROOT";
    pub const ROOT_ALIASES: &[&str] = &["RBENV_ROOT"];

    /// Directory name under the user's home, `.{manager}`.
    pub const RTENV_MANAGER: &str = "RTENV_MANAGER";

    /// Executable name under `versions/{version}/bin/`.
    pub const RTENV_BINARY: &str = "RTENV_BINARY";

    /// Comma-separated variables stripped in addition to the built-in set.
    pub const RTENV_SANITIZE_EXTRA: &str = "RTENV_SANITIZE_EXTRA";
}

/// Logging
pub mod observability {
    pub const RTENV_QUIET: &str = "RTENV_QUIET";
    pub const RTENV_LOG_LEVEL: &str = "RTENV_LOG_LEVEL";
    pub const RTENV_LOG_JSON: &str = "RTENV_LOG_JSON";
}
