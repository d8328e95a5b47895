//! Resolve installed runtimes under an rbenv-style root.
//!
//! Layout: `{root}/versions/{version}/bin/{binary}`. The variant only names a
//! gem environment; it never changes where the executable lives.
//!
//! Every query reads the filesystem afresh through the injected
//! [`FileSystem`]. The locator holds no mutable state, so one instance can be
//! shared across threads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rtenv_core::config::schema::DEFAULT_BINARY;
use rtenv_core::config::LocatorConfig;
use rtenv_fs::FileSystem;

use crate::descriptor::RuntimeDescriptor;
use crate::env;
use crate::error::Result;
use crate::identifier::{RuntimeIdentifier, DEFAULT_VARIANT};

/// Directory under the root holding one subdirectory per installed version.
pub const VERSIONS_DIR: &str = "versions";

pub struct RuntimeLocator {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    binary: String,
    extra_sanitized_vars: Vec<String>,
}

impl RuntimeLocator {
    /// Locator for `root`, looking for the `ruby` binary.
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            binary: DEFAULT_BINARY.to_string(),
            extra_sanitized_vars: Vec::new(),
        }
    }

    /// Locator configured from [`LocatorConfig`]. Without an explicit root
    /// this asks the filesystem for the user's home.
    pub fn from_config(fs: Arc<dyn FileSystem>, config: &LocatorConfig) -> Result<Self> {
        let root = match &config.root {
            Some(root) => root.clone(),
            None => config.root_under(&fs.user_home()?),
        };
        tracing::debug!("Runtime root: {}", root.display());
        Ok(Self::new(fs, root)
            .with_binary_name(config.binary.clone())
            .with_sanitized_vars(config.extra_sanitized_vars.clone()))
    }

    pub fn with_binary_name(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Variables to strip in addition to `GEM_HOME` and `GEM_PATH`.
    pub fn with_sanitized_vars(mut self, vars: Vec<String>) -> Self {
        self.extra_sanitized_vars = vars;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn binary_name(&self) -> &str {
        &self.binary
    }

    pub fn versions_dir(&self) -> PathBuf {
        self.root.join(VERSIONS_DIR)
    }

    /// `{root}/versions/{version}/bin`. The identifier guarantees the
    /// version is a single directory name, so this never leaves the root.
    pub fn bin_dir(&self, id: &RuntimeIdentifier) -> PathBuf {
        self.versions_dir().join(id.version()).join("bin")
    }

    pub fn executable_path(&self, id: &RuntimeIdentifier) -> PathBuf {
        self.bin_dir(id).join(&self.binary)
    }

    fn descriptor(&self, id: &RuntimeIdentifier) -> RuntimeDescriptor {
        RuntimeDescriptor::new(id.version(), id.variant(), self.executable_path(id), None)
    }

    /// Resolve `version` and `variant` (empty means `default`) to an
    /// installed runtime. Fails with `PathNotFound` when the executable is
    /// missing, whether or not the version directory exists.
    pub fn resolve(&self, version: &str, variant: &str) -> Result<RuntimeDescriptor> {
        let id = RuntimeIdentifier::new(version, variant)?;
        self.resolve_id(&id)
    }

    /// Resolve a combined `version@variant` identifier.
    pub fn resolve_identifier(&self, identifier: &str) -> Result<RuntimeDescriptor> {
        let id = RuntimeIdentifier::parse(identifier)?;
        self.resolve_id(&id)
    }

    fn resolve_id(&self, id: &RuntimeIdentifier) -> Result<RuntimeDescriptor> {
        let descriptor = self.descriptor(id);
        self.fs.assert_path_exists(
            descriptor.executable_path(),
            &format!("Unable to locate {} executable for {}", self.binary, id),
        )?;
        tracing::debug!(
            "Resolved {} to {}",
            id,
            descriptor.executable_path().display()
        );
        Ok(descriptor)
    }

    /// One `default`-variant descriptor per directory under `versions/`.
    ///
    /// Reflects directory presence only; executables are not checked. Order
    /// is unspecified. An empty `versions/` gives an empty list; a missing or
    /// unreadable one is an I/O error.
    pub fn list(&self) -> Result<Vec<RuntimeDescriptor>> {
        let names = self.fs.list_dir_names(&self.versions_dir())?;
        let runtimes: Vec<RuntimeDescriptor> = names
            .into_iter()
            .filter_map(|name| match RuntimeIdentifier::new(name, DEFAULT_VARIANT) {
                Ok(id) => Some(self.descriptor(&id)),
                Err(e) => {
                    tracing::warn!("Skipping {}", e);
                    None
                }
            })
            .collect();
        tracing::debug!(
            "Found {} runtime(s) under {}",
            runtimes.len(),
            self.versions_dir().display()
        );
        Ok(runtimes)
    }

    /// Whether the executable for `identifier` exists.
    ///
    /// A runtime that is not installed is `Ok(false)`. Errors are reserved
    /// for an invalid identifier or a failed existence check.
    pub fn exists(&self, identifier: &str) -> Result<bool> {
        let id = RuntimeIdentifier::parse(identifier)?;
        Ok(self.fs.path_exists(&self.executable_path(&id))?)
    }

    /// Environment for running `executable_path`, derived from `existing`.
    ///
    /// Gem variables are removed and the executable's directory is put at the
    /// front of `PATH`. `identifier` only supplies the bin directory when
    /// `executable_path` is a bare file name; in that case an invalid
    /// identifier is an error. No I/O is performed.
    pub fn build_environment(
        &self,
        identifier: &str,
        executable_path: &Path,
        existing: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>> {
        let bin_dir = match executable_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => self.bin_dir(&RuntimeIdentifier::parse(identifier)?),
        };
        Ok(env::build_environment(existing, &bin_dir, &self.extra_sanitized_vars))
    }

    /// Whether callers should treat the root as immutable.
    ///
    /// The root is writable only when it sits inside the user's home
    /// directory. If the home cannot be determined the root is read-only.
    pub fn is_read_only(&self) -> bool {
        match self.fs.user_home() {
            Ok(home) => !self.root.starts_with(&home),
            Err(e) => {
                tracing::warn!("Treating {} as read-only: {}", self.root.display(), e);
                true
            }
        }
    }
}

impl std::fmt::Debug for RuntimeLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeLocator")
            .field("root", &self.root)
            .field("binary", &self.binary)
            .field("extra_sanitized_vars", &self.extra_sanitized_vars)
            .finish_non_exhaustive()
    }
}
