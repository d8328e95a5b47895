//! Environment lookup with alias chains and `.env` fallback.
//!
//! `.env` values are kept in a private table instead of being written into
//! the process environment: rtenv hands its own environment to child
//! processes, and project settings must not leak into them.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::OnceLock;

static DOTENV: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Parse `.env` content. Blank lines and `#` comments are skipped, matching
/// quotes around a value are stripped, and an unquoted trailing `# comment`
/// is dropped.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let mut value = value.trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            vars.insert(key.to_string(), value.to_string());
        }
    }
    vars
}

fn read_dotenv(dir: &Path) -> HashMap<String, String> {
    let path = dir.join(".env");
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let vars = parse_dotenv(&content);
            tracing::debug!("Loaded {} variable(s) from {}", vars.len(), path.display());
            vars
        }
        Err(_) => HashMap::new(),
    }
}

/// `.env` from the working directory, read once per process.
fn dotenv() -> &'static HashMap<String, String> {
    DOTENV.get_or_init(|| {
        env::current_dir()
            .map(|d| read_dotenv(&d))
            .unwrap_or_default()
    })
}

/// Value of `key` from the loaded `.env`, if any.
pub fn dotenv_value(key: &str) -> Option<String> {
    dotenv().get(key).cloned()
}

/// Process environment first, then `.env`, for the primary key and each alias.
fn lookup(primary: &str, aliases: &[&str]) -> Option<String> {
    std::iter::once(primary)
        .chain(aliases.iter().copied())
        .find_map(|k| env::var(k).ok())
        .or_else(|| {
            std::iter::once(primary)
                .chain(aliases.iter().copied())
                .find_map(dotenv_value)
        })
}

/// Read from the primary key or alias chain, falling back to `default`.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    lookup(primary, aliases)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default)
}

/// Read from the primary key or alias chain. Empty values count as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    lookup(primary, aliases)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `0`/`false`/`no`/`off` are false, anything else set is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    match lookup(primary, aliases) {
        Some(s) => parse_bool(&s),
        None => default,
    }
}

/// Comma-separated list; blank items are dropped.
pub fn env_list(primary: &str, aliases: &[&str]) -> Vec<String> {
    env_optional(primary, aliases)
        .map(|s| split_list(&s))
        .unwrap_or_default()
}

fn parse_bool(s: &str) -> bool {
    !matches!(
        s.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
