//! Typed command results

use serde::Serialize;

use crate::color::ColorPercentages;

/// Payload produced by a command executor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CommandOutput {
    ColorPercentages(ColorPercentages),
}

impl From<ColorPercentages> for CommandOutput {
    fn from(percentages: ColorPercentages) -> Self {
        CommandOutput::ColorPercentages(percentages)
    }
}

/// Output of a successful command, tagged with the command that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult {
    pub command: String,
    pub output: CommandOutput,
}

impl CommandResult {
    pub fn new(command: impl Into<String>, output: CommandOutput) -> Self {
        Self {
            command: command.into(),
            output,
        }
    }

    pub fn color_percentages(&self) -> Option<&ColorPercentages> {
        match &self.output {
            CommandOutput::ColorPercentages(percentages) => Some(percentages),
        }
    }
}
