mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use rtenv_core::observability;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();
    let locator = commands::build_locator(cli.root.as_deref(), cli.binary.as_deref())?;

    let code = match cli.command {
        Commands::List { json } => commands::runtime::cmd_list(&locator, json)?,
        Commands::Resolve { identifier, json } => {
            commands::runtime::cmd_resolve(&locator, &identifier, json)?
        }
        Commands::Exists { identifier } => commands::runtime::cmd_exists(&locator, &identifier)?,
        Commands::Info { json } => commands::runtime::cmd_info(&locator, json)?,
        Commands::Env { identifier, json } => commands::env::cmd_env(&locator, &identifier, json)?,
        Commands::Exec {
            identifier,
            command,
        } => commands::env::cmd_exec(&locator, &identifier, &command)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
