//! Test doubles for backend adapter tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::{MultiplexerError, Result};
use super::runner::ControlRunner;

/// Runner that replays canned responses and records every call.
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Result<String>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// All argument lists this runner was invoked with, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl ControlRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|s| s.to_string()).collect());
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("ScriptedRunner ran out of responses")
    }
}

/// Shorthand for a generic command failure response.
pub fn failure() -> Result<String> {
    Err(MultiplexerError::command_failed(
        "test",
        &[],
        "scripted failure",
        None,
    ))
}
