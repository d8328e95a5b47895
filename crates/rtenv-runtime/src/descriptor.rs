use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::identifier::VARIANT_DELIMITER;

/// One installed runtime, as seen by a single locator query.
///
/// Equality and hashing cover version, variant and executable path only;
/// `library_home` is informational.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeDescriptor {
    version: String,
    variant: String,
    executable_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    library_home: Option<PathBuf>,
}

impl RuntimeDescriptor {
    pub fn new(
        version: impl Into<String>,
        variant: impl Into<String>,
        executable_path: impl Into<PathBuf>,
        library_home: Option<PathBuf>,
    ) -> Self {
        Self {
            version: version.into(),
            variant: variant.into(),
            executable_path: executable_path.into(),
            library_home,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }

    pub fn library_home(&self) -> Option<&Path> {
        self.library_home.as_deref()
    }

    /// `version@variant`
    pub fn name(&self) -> String {
        format!("{}{}{}", self.version, VARIANT_DELIMITER, self.variant)
    }
}

impl PartialEq for RuntimeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.variant == other.variant
            && self.executable_path == other.executable_path
    }
}

impl Eq for RuntimeDescriptor {}

impl Hash for RuntimeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.variant.hash(state);
        self.executable_path.hash(state);
    }
}

impl fmt::Display for RuntimeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
