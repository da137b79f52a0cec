use clap::Args;
use serde::Serialize;

use super::registry_for;
use crate::infra::multiplexer::{self, MultiplexerKind};
use crate::infra::registry::PaneRegistry;
use crate::shared::config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Status {
    multiplexer: Option<MultiplexerKind>,
    handles: Vec<HandleStatus>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HandleStatus {
    backend: MultiplexerKind,
    handle: Option<String>,
}

fn collect_status(multiplexer: Option<MultiplexerKind>, registry: &dyn PaneRegistry) -> Status {
    let handles = MultiplexerKind::ALL
        .iter()
        .map(|&backend| HandleStatus {
            backend,
            handle: registry.read(backend),
        })
        .collect();

    Status {
        multiplexer,
        handles,
    }
}

pub fn run(args: &StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    let registry = registry_for(&config);
    let status = collect_status(multiplexer::detect(), &registry);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match status.multiplexer {
        Some(kind) => println!("multiplexer: {kind}"),
        None => println!("multiplexer: (none)"),
    }
    for entry in &status.handles {
        match &entry.handle {
            Some(handle) => println!("{} pane: {handle}", entry.backend),
            None => println!("{} pane: (none)", entry.backend),
        }
    }

    Ok(())
}
