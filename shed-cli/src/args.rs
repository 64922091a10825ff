use clap::{Parser, Subcommand, builder::styling};
use std::path::PathBuf;

use crate::productinfo;

const SHORT_DESCRIPTION: &str = "Per-project shell workspaces";

const LONG_DESCRIPTION: &str = r"
shed organizes per-project shell functions and environment variables into
named workspaces, and loads or runs them with the right shell context. It
supports sh, bash, zsh, and fish, and picks up the shell from $SHELL.
";

const VERSION: &str = const_format::concatcp!(
    productinfo::PRODUCT_VERSION,
    " (",
    productinfo::PRODUCT_GIT_VERSION,
    ")"
);

/// Parsed command-line arguments for the `shed` CLI.
#[derive(Parser)]
#[clap(name = productinfo::PRODUCT_NAME,
       version = VERSION,
       about = SHORT_DESCRIPTION,
       long_about = LONG_DESCRIPTION,
       author,
       styles = shed_help_styles())]
pub struct CommandLineArgs {
    /// Enable debug logging.
    #[clap(long = "debug", env = "SHED_DEBUG", global = true)]
    pub debug: bool,

    /// Command to execute.
    #[clap(subcommand)]
    pub command: Command,
}

/// A `shed` subcommand.
#[derive(Subcommand)]
pub enum Command {
    /// Create a workspace bound to a project directory.
    Create {
        /// Name of the workspace.
        name: String,
        /// Project directory the workspace is bound to.
        path: PathBuf,
    },

    /// List workspaces.
    List,

    /// Show the functions and envs of a workspace.
    Show {
        /// Name of the workspace.
        name: String,
    },

    /// Run a function in a given workspace.
    #[clap(alias = "r")]
    Run {
        /// Env to load (e.g. prod); the default env when omitted.
        #[clap(short = 'e', long = "env", value_name = "ENV")]
        env: Option<String>,

        /// Name of the workspace.
        name: String,

        /// Function to run, followed by its arguments.
        #[clap(required = true, num_args = 1.., allow_hyphen_values = true)]
        function_and_args: Vec<String>,
    },

    /// Edit a workspace's function file.
    Edit {
        /// Name of the workspace.
        name: String,
    },

    /// Manage workspace envs.
    #[clap(subcommand)]
    Env(EnvCommand),

    /// Set a workspace configuration entry.
    Set {
        /// Name of the workspace.
        name: String,
        /// Config key (`app` or `path`).
        key: String,
        /// New value.
        value: String,
    },

    /// Remove a workspace.
    Remove {
        /// Name of the workspace.
        name: String,
    },

    /// Print cd-alias statements for all workspaces, for eval'ing in rc files.
    Aliases {
        /// Prefix prepended to each alias name.
        #[clap(long = "prefix", default_value = "")]
        prefix: String,
    },

    /// Recreate missing workspace directories and files.
    Fix,

    /// Migrate a legacy store layout to the current one.
    Migrate,

    /// Print completion candidates (used by shell completion scripts).
    #[clap(subcommand, hide = true)]
    Complete(CompleteCommand),
}

/// Env management subcommands.
#[derive(Subcommand)]
pub enum EnvCommand {
    /// Create a new env in a workspace.
    Create {
        /// Name of the workspace.
        name: String,
        /// Name of the env.
        env: String,
    },

    /// Edit one of a workspace's env files.
    Edit {
        /// Name of the workspace.
        name: String,
        /// Name of the env.
        env: String,
    },
}

/// Completion candidate feeds.
#[derive(Subcommand)]
pub enum CompleteCommand {
    /// Workspace names matching a prefix.
    Workspaces {
        /// Prefix typed so far.
        #[clap(default_value = "")]
        prefix: String,
    },

    /// Function names in a workspace matching a prefix.
    Functions {
        /// Name of the workspace.
        name: String,
        /// Prefix typed so far.
        #[clap(default_value = "")]
        prefix: String,
    },

    /// Env names in a workspace matching a prefix.
    Envs {
        /// Name of the workspace.
        name: String,
        /// Prefix typed so far.
        #[clap(default_value = "")]
        prefix: String,
    },
}

/// Returns clap styling to be used for command-line help.
#[doc(hidden)]
fn shed_help_styles() -> clap::builder::Styles {
    styling::Styles::styled()
        .header(
            styling::AnsiColor::Yellow.on_default()
                | styling::Effects::BOLD
                | styling::Effects::UNDERLINE,
        )
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Magenta.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}
