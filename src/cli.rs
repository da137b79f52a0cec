use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::clear::ClearArgs;
use crate::commands::config::ConfigCommands;
use crate::commands::open::OpenArgs;
use crate::commands::status::StatusArgs;

#[derive(Parser)]
#[command(
    name = "easel",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a command in the canvas pane, reusing it if one exists
    Open(OpenArgs),

    /// Show the detected multiplexer and stored pane handles
    Status(StatusArgs),

    /// Forget stored pane handles
    Clear(ClearArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_accepts_hyphen_leading_command_tokens() {
        let cli = Cli::try_parse_from(["easel", "open", "ls", "-la"]).unwrap();
        let Commands::Open(args) = cli.command else {
            panic!("expected open subcommand");
        };
        assert_eq!(args.command, vec!["ls", "-la"]);
    }

    #[test]
    fn open_accepts_command_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["easel", "open", "-la"]).unwrap();
        let Commands::Open(args) = cli.command else {
            panic!("expected open subcommand");
        };
        assert_eq!(args.command, vec!["-la"]);
    }
}
