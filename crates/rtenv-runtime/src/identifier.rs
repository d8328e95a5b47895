//! `version@variant` identifiers.
//!
//! The format is a tagged string, not a grammar: split once on the first `@`.
//! A variant name containing `@` cannot be expressed; everything after the
//! first delimiter, including further `@`s, becomes the variant.
//!
//! The version names a directory under `versions/`, so it must be exactly one
//! plain path component: no separators, no `.`/`..`, no root or prefix.

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::error::LocatorError;

/// Separates version from variant, as in `1.9.2-p290@default`.
pub const VARIANT_DELIMITER: char = '@';

/// Variant used when none is given.
pub const DEFAULT_VARIANT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeIdentifier {
    version: String,
    variant: String,
}

impl RuntimeIdentifier {
    /// Build from parts. An empty variant becomes [`DEFAULT_VARIANT`].
    /// Fails unless `version` is a single directory name.
    pub fn new(version: impl Into<String>, variant: impl Into<String>) -> Result<Self, LocatorError> {
        let version = version.into();
        let variant = variant.into();
        if !is_directory_name(&version) {
            return Err(LocatorError::InvalidIdentifier(format!(
                "{version}{VARIANT_DELIMITER}{variant}"
            )));
        }
        let variant = if variant.is_empty() {
            DEFAULT_VARIANT.to_string()
        } else {
            variant
        };
        Ok(Self { version, variant })
    }

    /// Split `identifier` on its first `@`.
    pub fn parse(identifier: &str) -> Result<Self, LocatorError> {
        let (version, variant) = identifier
            .split_once(VARIANT_DELIMITER)
            .unwrap_or((identifier, ""));
        if version.is_empty() {
            return Err(LocatorError::InvalidIdentifier(identifier.to_string()));
        }
        Self::new(version, variant)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }
}

fn is_directory_name(version: &str) -> bool {
    let mut components = Path::new(version).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == version
    )
}

impl FromStr for RuntimeIdentifier {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuntimeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.version, VARIANT_DELIMITER, self.variant)
    }
}
