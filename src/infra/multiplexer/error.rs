use thiserror::Error;

/// Errors from multiplexer control commands.
#[derive(Error, Debug)]
pub enum MultiplexerError {
    #[error("{command} command failed: {message}")]
    CommandFailed {
        command: String,
        args: Vec<String>,
        message: String,
        stderr: Option<String>,
    },

    #[error("{command} did not report a pane id for the new pane")]
    NoPaneId { command: String },
}

impl MultiplexerError {
    pub(crate) fn command_failed(
        command: &str,
        args: &[&str],
        message: impl Into<String>,
        stderr: Option<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            message: message.into(),
            stderr,
        }
    }
}

pub type Result<T> = std::result::Result<T, MultiplexerError>;
