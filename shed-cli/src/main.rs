//! Implements the command-line interface for the `shed` workspace manager.

#![deny(missing_docs)]

mod args;
#[allow(dead_code)]
mod productinfo;

use std::path::PathBuf;

use clap::Parser;

use crate::args::{Command, CommandLineArgs, CompleteCommand, EnvCommand};
use shed_core::{StoreOptions, WorkspaceStore};

/// Main entry point for the `shed` CLI.
fn main() {
    // Set up panic handler. On release builds, it will capture panic details
    // to a temporary .toml file and report a human-readable message.
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION")
    )
    .homepage(env!("CARGO_PKG_HOMEPAGE")));

    let args = CommandLineArgs::parse();
    init_tracing(args.debug);

    let exit_code = match run(args) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("error: {e}");
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(args: CommandLineArgs) -> Result<(), shed_core::Error> {
    match args.command {
        Command::Create { name, path } => new_store()?.create(&name, &path),
        Command::List => {
            let store = new_store()?;
            for workspace in store.list()? {
                println!("{}", workspace.name);
            }
            Ok(())
        }
        Command::Show { name } => show(&new_store()?, &name),
        Command::Run {
            env,
            name,
            function_and_args,
        } => new_store()?.run_function(&name, env.as_deref(), &function_and_args),
        Command::Edit { name } => new_store()?.edit(&name),
        Command::Env(env_command) => match env_command {
            EnvCommand::Create { name, env } => new_store()?.create_env(&name, &env),
            EnvCommand::Edit { name, env } => new_store()?.edit_env(&name, &env),
        },
        Command::Set { name, key, value } => new_store()?.set_config(&name, &key, &value),
        Command::Remove { name } => new_store()?.remove(&name),
        Command::Aliases { prefix } => {
            let store = new_store()?;
            for alias in store.build_aliases(&prefix)? {
                println!("{alias}");
            }
            Ok(())
        }
        Command::Fix => new_store()?.fix(),
        Command::Migrate => new_store()?.migrate(),
        Command::Complete(complete) => {
            // Completion feeds stay silent on any error; a broken store must
            // not break the user's completion.
            if let Ok(store) = new_store() {
                let candidates = match complete {
                    CompleteCommand::Workspaces { prefix } => {
                        shed_core::find_workspaces(&store, &prefix)
                    }
                    CompleteCommand::Functions { name, prefix } => {
                        shed_core::find_functions(&store, &name, &prefix)
                    }
                    CompleteCommand::Envs { name, prefix } => {
                        shed_core::find_envs(&store, &name, &prefix)
                    }
                };
                for candidate in candidates.unwrap_or_default() {
                    println!("{candidate}");
                }
            }
            Ok(())
        }
    }
}

/// Builds the workspace store from the calling environment.
fn new_store() -> Result<WorkspaceStore, shed_core::Error> {
    WorkspaceStore::new(StoreOptions {
        shell_bin: std::env::var("SHELL").unwrap_or_default(),
        editor: std::env::var("EDITOR").ok(),
        visual: std::env::var("VISUAL").ok(),
        config_dir: std::env::var_os("SHED_CONFIG_PATH").map(PathBuf::from),
    })
}

fn show(store: &WorkspaceStore, name: &str) -> Result<(), shed_core::Error> {
    let workspace = store.get(name)?;

    println!("## {} ##", workspace.name);
    println!();
    println!("Functions:");
    if workspace.functions.is_empty() {
        println!("   no functions defined");
    }
    let width = workspace
        .functions
        .iter()
        .map(|function| function.name.len())
        .max()
        .unwrap_or(0);
    for function in &workspace.functions {
        if function.description.is_empty() {
            println!("   {}", function.name);
        } else {
            println!("   {:<width$} - {}", function.name, function.description);
        }
    }
    println!();
    println!("Envs:");
    if workspace.envs.is_empty() {
        println!("   no envs defined");
    }
    for env in &workspace.envs {
        println!("   - {env}");
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if debug {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(level);

    if tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .is_err()
    {
        // Proceed on anyway but complain audibly.
        eprintln!("warning: failed to initialize tracing.");
    }
}
