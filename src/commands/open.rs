use clap::Args;

use super::registry_for;
use crate::orchestrator;
use crate::shared::config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct OpenArgs {
    /// Command to run inside the canvas pane.
    /// Multiple arguments are joined with spaces and passed to the pane's
    /// shell verbatim; quote anything the shell should not split.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub fn run(args: &OpenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    let registry = registry_for(&config);
    let command = args.command.join(" ");

    let placement = orchestrator::place(&command, &registry, &config)?;

    if placement.created_new {
        println!("created new canvas pane ({})", placement.kind);
    } else {
        println!("reused existing canvas pane ({})", placement.kind);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_args_join_with_spaces() {
        let args = OpenArgs {
            command: vec!["echo".to_string(), "hi".to_string()],
        };
        assert_eq!(args.command.join(" "), "echo hi");
    }
}
