use std::process::Command;

use super::error::{MultiplexerError, Result};

/// Runs one multiplexer control command and captures its output.
///
/// Backend adapters are generic over this trait so tests can inject a
/// scripted runner instead of spawning real tmux/zellij binaries.
pub trait ControlRunner {
    /// Run the control binary with `args`, returning trimmed stdout on
    /// success. Non-zero exit is an error carrying the captured stderr.
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// Real runner over `std::process::Command`, bound to one control binary.
pub struct ProcessRunner {
    bin: String,
}

impl ProcessRunner {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl ControlRunner for ProcessRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.bin)
            .args(args)
            .output()
            .map_err(|e| MultiplexerError::command_failed(&self.bin, args, e.to_string(), None))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(MultiplexerError::command_failed(
                &self.bin,
                args,
                format!(
                    "exited with status {}",
                    output.status.code().unwrap_or(-1)
                ),
                Some(stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
