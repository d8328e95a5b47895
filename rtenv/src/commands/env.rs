//! `env` and `exec`: run a runtime with an environment that only sees its own gems.

use std::collections::{BTreeMap, HashMap};
use std::process::Command;

use anyhow::{Context, Result};
use rtenv_runtime::RuntimeLocator;

use super::runtime::resolve;

fn runtime_environment(locator: &RuntimeLocator, identifier: &str) -> Result<HashMap<String, String>> {
    let runtime = resolve(locator, identifier)?;
    let current: HashMap<String, String> = std::env::vars().collect();
    locator
        .build_environment(identifier, runtime.executable_path(), &current)
        .with_context(|| format!("Cannot build the environment for {}", identifier))
}

/// `rtenv env`
pub fn cmd_env(locator: &RuntimeLocator, identifier: &str, json: bool) -> Result<i32> {
    let env: BTreeMap<String, String> = runtime_environment(locator, identifier)?
        .into_iter()
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        for (key, value) in &env {
            println!("{}={}", key, value);
        }
    }
    Ok(0)
}

/// `rtenv exec`
pub fn cmd_exec(locator: &RuntimeLocator, identifier: &str, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .context("No command given to exec")?;
    let env = runtime_environment(locator, identifier)?;

    tracing::debug!("Running {} {:?} with {}", program, args, identifier);
    // The child's PATH drives program lookup, so `ruby` finds the selected version.
    let status = Command::new(program)
        .args(args)
        .env_clear()
        .envs(&env)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    Ok(status.code().unwrap_or(1))
}
