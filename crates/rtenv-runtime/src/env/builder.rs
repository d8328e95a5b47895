//! Build the sanitized environment map.

use std::collections::HashMap;
use std::path::Path;

use super::{PATH, PATH_SEPARATOR, SANITIZED_VARS};

/// Return `dir` followed by the existing search path, unchanged and in order.
/// An absent or empty existing path yields just `dir`.
pub fn prepend_search_path(dir: &Path, existing: Option<&str>) -> String {
    let dir = dir.to_string_lossy();
    match existing {
        Some(rest) if !rest.is_empty() => format!("{dir}{PATH_SEPARATOR}{rest}"),
        _ => dir.into_owned(),
    }
}

/// Copy `existing`, drop the built-in gem variables plus `extra_removed`, and
/// put `bin_dir` at the front of `PATH`. `existing` is never modified.
///
/// Removed variables are absent from the result, not set to empty: an empty
/// `GEM_HOME` still changes how RubyGems resolves its home. On Windows keys
/// match case-insensitively and `PATH` keeps the caller's spelling (`Path`).
pub fn build_environment(
    existing: &HashMap<String, String>,
    bin_dir: &Path,
    extra_removed: &[String],
) -> HashMap<String, String> {
    let path_key = existing
        .keys()
        .find(|key| same_var(key, PATH))
        .cloned()
        .unwrap_or_else(|| PATH.to_string());

    let mut env = existing.clone();
    env.retain(|key, _| {
        let removed = SANITIZED_VARS
            .iter()
            .copied()
            .chain(extra_removed.iter().map(String::as_str))
            .any(|var| same_var(key, var));
        if removed {
            tracing::debug!("Removed {} from runtime environment", key);
        }
        // Only one spelling of PATH may survive.
        !removed && (key == &path_key || !same_var(key, PATH))
    });

    let path = prepend_search_path(bin_dir, existing.get(&path_key).map(String::as_str));
    env.insert(path_key, path);
    env
}

/// Whether two environment variable names refer to the same variable.
#[cfg(windows)]
fn same_var(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(not(windows))]
fn same_var(a: &str, b: &str) -> bool {
    a == b
}
