//! Runtime locator for rbenv-style installations.
//!
//! Installed runtimes live at `{root}/versions/{version}`, each with its
//! executable at `bin/{binary}`. [`RuntimeLocator`] resolves `version@variant`
//! identifiers against that layout, lists what is installed, and builds a
//! child-process environment that cannot be redirected to foreign gem homes.

pub mod descriptor;
pub mod env;
pub mod error;
pub mod identifier;
pub mod locator;

pub use descriptor::RuntimeDescriptor;
pub use error::{LocatorError, Result};
pub use identifier::{RuntimeIdentifier, DEFAULT_VARIANT, VARIANT_DELIMITER};
pub use locator::RuntimeLocator;
