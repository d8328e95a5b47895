//! Typed configuration views, loaded from the environment.

use super::env_keys::{locator as loc_keys, observability as obv_keys};
use super::loader::{env_bool, env_list, env_optional, env_or};
use std::path::PathBuf;

/// Manager directory used for the default root, `~/.rbenv`.
pub const DEFAULT_MANAGER: &str = "rbenv";

/// Runtime executable looked up under `versions/{version}/bin/`.
pub const DEFAULT_BINARY: &str = "ruby";

/// Where runtimes are installed and how they are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Explicit installation root. `None` means `{home}/.{manager}`.
    pub root: Option<PathBuf>,
    pub manager: String,
    pub binary: String,
    /// Variables stripped from child environments on top of the built-in set.
    pub extra_sanitized_vars: Vec<String>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            root: None,
            manager: DEFAULT_MANAGER.to_string(),
            binary: DEFAULT_BINARY.to_string(),
            extra_sanitized_vars: Vec::new(),
        }
    }
}

impl LocatorConfig {
    pub fn from_env() -> Self {
        Self {
            root: env_optional(loc_keys::RTENV_ROOT, loc_keys::ROOT_ALIASES).map(PathBuf::from),
            manager: env_or(loc_keys::RTENV_MANAGER, &[], || DEFAULT_MANAGER.to_string()),
            binary: env_or(loc_keys::RTENV_BINARY, &[], || DEFAULT_BINARY.to_string()),
            extra_sanitized_vars: env_list(loc_keys::RTENV_SANITIZE_EXTRA, &[]),
        }
    }

    /// Root directory given the user's home: the explicit root if set,
    /// otherwise `{home}/.{manager}`.
    pub fn root_under(&self, home: &std::path::Path) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| home.join(format!(".{}", self.manager)))
    }
}

/// Logging configuration: quiet, log_level, log_json
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(obv_keys::RTENV_QUIET, &[], false),
            log_level: env_or(obv_keys::RTENV_LOG_LEVEL, &[], || "rtenv=info".to_string()),
            log_json: env_bool(obv_keys::RTENV_LOG_JSON, &[], false),
        })
    }

    /// Filter directive actually applied: quiet mode caps everything at warn.
    pub fn effective_level(&self) -> String {
        if self.quiet {
            "rtenv=warn".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_root_under_home() {
        let cfg = LocatorConfig::default();
        assert_eq!(
            cfg.root_under(Path::new("/Users/kross")),
            PathBuf::from("/Users/kross/.rbenv")
        );
    }

    #[test]
    fn test_explicit_root_wins() {
        let cfg = LocatorConfig {
            root: Some(PathBuf::from("/opt/rubies")),
            manager: "rbenv".to_string(),
            ..LocatorConfig::default()
        };
        assert_eq!(cfg.root_under(Path::new("/home/dev")), PathBuf::from("/opt/rubies"));
    }

    #[test]
    fn test_manager_name_drives_root() {
        let cfg = LocatorConfig {
            manager: "rvm".to_string(),
            ..LocatorConfig::default()
        };
        assert_eq!(cfg.root_under(Path::new("/home/dev")), PathBuf::from("/home/dev/.rvm"));
    }

    #[test]
    fn test_quiet_caps_level() {
        let cfg = ObservabilityConfig {
            quiet: true,
            log_level: "rtenv=debug".to_string(),
            log_json: false,
        };
        assert_eq!(cfg.effective_level(), "rtenv=warn");
        let cfg = ObservabilityConfig { quiet: false, ..cfg };
        assert_eq!(cfg.effective_level(), "rtenv=debug");
    }
}
