//! Build and maintenance tasks for this workspace.

use anyhow::Result;
use clap::Parser;

mod generate;

#[derive(Parser)]
struct CommandLineArgs {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate artifacts.
    #[clap(subcommand)]
    Generate(generate::GenCommand),
}

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    match &args.command {
        Command::Generate(gen_cmd) => generate::run(gen_cmd),
    }
}
