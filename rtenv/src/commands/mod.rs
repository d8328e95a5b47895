//! Subcommand implementations. Each returns the process exit code.

pub mod env;
pub mod runtime;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rtenv_core::config::LocatorConfig;
use rtenv_fs::LocalFileSystem;
use rtenv_runtime::RuntimeLocator;

/// Locator over the real filesystem. CLI flags override configuration.
pub fn build_locator(root: Option<&str>, binary: Option<&str>) -> Result<RuntimeLocator> {
    let mut config = LocatorConfig::from_env();
    if let Some(root) = root {
        config.root = Some(PathBuf::from(root));
    }
    if let Some(binary) = binary {
        config.binary = binary.to_string();
    }
    RuntimeLocator::from_config(Arc::new(LocalFileSystem::new()), &config)
        .context("Cannot determine the runtime installation root; pass --root or set RTENV_ROOT")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtenv_runtime::RuntimeIdentifier;
    use std::path::Path;

    #[test]
    fn test_build_locator_flags_override_config() {
        let locator = build_locator(Some("/opt/rubies"), Some("jruby")).unwrap();
        assert_eq!(locator.root(), Path::new("/opt/rubies"));
        assert_eq!(locator.binary_name(), "jruby");
        assert_eq!(
            locator.executable_path(&RuntimeIdentifier::parse("9.4.3.0").unwrap()),
            Path::new("/opt/rubies/versions/9.4.3.0/bin/jruby")
        );
    }
}
