mod cli;
mod commands;
mod infra;
mod orchestrator;
mod shared;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Respects RUST_LOG; quiet by default so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Open(args) => commands::open::run(&args)?,
        Commands::Status(args) => commands::status::run(&args)?,
        Commands::Clear(args) => commands::clear::run(&args)?,
        Commands::Config(cmd) => cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "easel", &mut std::io::stdout());
        }
    }

    Ok(())
}
