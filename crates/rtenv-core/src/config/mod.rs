//! rtenv configuration layer.
//!
//! Every environment variable rtenv itself reads goes through this module;
//! callers work with the typed views in `schema`.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `env_list` and `.env` support
//! - `schema`: `LocatorConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants and aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{dotenv_value, env_bool, env_list, env_optional, env_or, parse_dotenv};
pub use schema::{LocatorConfig, ObservabilityConfig};
