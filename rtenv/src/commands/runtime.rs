//! `list`, `resolve`, `exists` and `info`.

use anyhow::{Context, Result};
use rtenv_runtime::{RuntimeDescriptor, RuntimeLocator};
use serde_json::json;

/// `rtenv list`
pub fn cmd_list(locator: &RuntimeLocator, json: bool) -> Result<i32> {
    let mut runtimes = locator.list().with_context(|| {
        format!(
            "Cannot list installed runtimes in {}",
            locator.versions_dir().display()
        )
    })?;
    runtimes.sort_by(|a, b| a.version().cmp(b.version()));

    if json {
        println!("{}", serde_json::to_string_pretty(&runtimes)?);
        return Ok(0);
    }
    if runtimes.is_empty() {
        eprintln!("No runtimes installed in {}", locator.versions_dir().display());
        return Ok(0);
    }
    for runtime in &runtimes {
        println!("{}", runtime.version());
    }
    Ok(0)
}

/// `rtenv resolve`
pub fn cmd_resolve(locator: &RuntimeLocator, identifier: &str, json: bool) -> Result<i32> {
    let runtime = resolve(locator, identifier)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&runtime)?);
    } else {
        println!("{}", runtime.executable_path().display());
    }
    Ok(0)
}

/// `rtenv exists`
pub fn cmd_exists(locator: &RuntimeLocator, identifier: &str) -> Result<i32> {
    let installed = locator
        .exists(identifier)
        .with_context(|| format!("Cannot check whether {} is installed", identifier))?;
    tracing::debug!("{} installed: {}", identifier, installed);
    Ok(if installed { 0 } else { 1 })
}

/// `rtenv info`
pub fn cmd_info(locator: &RuntimeLocator, json: bool) -> Result<i32> {
    let installed = match locator.list() {
        Ok(runtimes) => Some(runtimes.len()),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };
    let read_only = locator.is_read_only();

    if json {
        let info = json!({
            "root": locator.root(),
            "binary": locator.binary_name(),
            "read_only": read_only,
            "installed": installed,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(0);
    }
    println!("root:      {}", locator.root().display());
    println!("binary:    {}", locator.binary_name());
    println!("read-only: {}", if read_only { "yes" } else { "no" });
    match installed {
        Some(n) => println!("installed: {}", n),
        None => println!("installed: unavailable"),
    }
    Ok(0)
}

/// Resolve with a user-facing error for the not-installed case.
pub(crate) fn resolve(locator: &RuntimeLocator, identifier: &str) -> Result<RuntimeDescriptor> {
    locator.resolve_identifier(identifier).with_context(|| {
        format!(
            "Runtime {} is not available under {}",
            identifier,
            locator.root().display()
        )
    })
}
