//! Presentation-side collaborators
//!
//! The pipeline never prints or exits. It hands results to a [`ResultSink`]
//! and lets the caller decide what to do with failures.

use super::result::CommandResult;
use crate::error::ErrorKind;

/// Consumer of command results and error signals
pub trait ResultSink {
    /// Called once per successful command, after all processing is done
    fn on_result(&mut self, result: &CommandResult);

    fn on_error(&mut self, kind: ErrorKind, message: &str);
}

/// Source of the command names to show as usage instructions
pub trait InstructionsProvider {
    fn list_commands(&self) -> Vec<&str>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn on_result(&mut self, result: &CommandResult) {
        (**self).on_result(result)
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        (**self).on_error(kind, message)
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn on_result(&mut self, result: &CommandResult) {
        (**self).on_result(result)
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        (**self).on_error(kind, message)
    }
}

/// Sink that records everything it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub results: Vec<CommandResult>,
    pub errors: Vec<(ErrorKind, String)>,
}

impl ResultSink for RecordingSink {
    fn on_result(&mut self, result: &CommandResult) {
        self.results.push(result.clone());
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        self.errors.push((kind, message.to_string()));
    }
}
