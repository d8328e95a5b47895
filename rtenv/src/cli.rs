use clap::{Parser, Subcommand};

/// rtenv - resolve rbenv-style runtime installations and run them with a clean environment
#[derive(Parser, Debug)]
#[command(name = "rtenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Installation root (default: $RTENV_ROOT, $RBENV_ROOT or ~/.rbenv)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<String>,

    /// Runtime executable name under versions/<VERSION>/bin (default: $RTENV_BINARY or ruby)
    #[arg(long, global = true, value_name = "NAME")]
    pub binary: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed runtime versions
    List {
        /// Print descriptors as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Resolve VERSION[@VARIANT] to its executable (fails if not installed)
    Resolve {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,

        /// Print the full descriptor as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Exit 0 if VERSION[@VARIANT] is installed, 1 otherwise
    Exists {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
    },

    /// Print the sanitized environment for running VERSION[@VARIANT]
    Env {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,

        /// Print as a JSON object instead of KEY=VALUE lines
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run a command with the sanitized environment of VERSION[@VARIANT]
    Exec {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,

        /// Command and arguments, e.g. `-- ruby -v`
        #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },

    /// Show the installation root and whether it is writable
    Info {
        #[arg(long, default_value = "false")]
        json: bool,
    },
}
