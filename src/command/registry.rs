//! Command table mapping names to validator/executor pairs
//!
//! The registry is assembled once through [`CommandRegistryBuilder`] and is
//! read-only afterwards. Duplicate names are rejected while building, so a
//! misconfigured table fails at startup rather than on first use.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::analyze::{validate_analyze, AnalyzeExecutor};
use super::result::CommandOutput;
use super::sink::InstructionsProvider;
use crate::color::ColorAnalyzer;
use crate::constants::ANALYZE_COMMAND;
use crate::image_loader::ImageSource;
use crate::{AnalysisError, Result};

/// Checks raw arguments and returns them in normalized form
pub trait CommandValidator: Send + Sync {
    fn validate(&self, command: &str, args: &[String]) -> Result<Vec<String>>;
}

/// Runs a command on already validated arguments
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, args: &[String]) -> Result<CommandOutput>;
}

impl<F> CommandValidator for F
where
    F: Fn(&str, &[String]) -> Result<Vec<String>> + Send + Sync,
{
    fn validate(&self, command: &str, args: &[String]) -> Result<Vec<String>> {
        self(command, args)
    }
}

impl<F> CommandExecutor for F
where
    F: Fn(&[String]) -> Result<CommandOutput> + Send + Sync,
{
    fn execute(&self, args: &[String]) -> Result<CommandOutput> {
        self(args)
    }
}

/// A registered command
pub struct CommandEntry {
    name: String,
    validator: Box<dyn CommandValidator>,
    executor: Box<dyn CommandExecutor>,
}

impl CommandEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validate(&self, args: &[String]) -> Result<Vec<String>> {
        self.validator.validate(&self.name, args)
    }

    pub fn execute(&self, args: &[String]) -> Result<CommandOutput> {
        self.executor.execute(args)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct CommandRegistryBuilder {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl CommandRegistryBuilder {
    /// Add a command.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::DuplicateCommand` if `name` is already taken.
    pub fn register<V, E>(mut self, name: impl Into<String>, validator: V, executor: E) -> Result<Self>
    where
        V: CommandValidator + 'static,
        E: CommandExecutor + 'static,
    {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(AnalysisError::DuplicateCommand { command: name });
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(CommandEntry {
            name,
            validator: Box::new(validator),
            executor: Box::new(executor),
        });

        Ok(self)
    }

    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            entries: self.entries,
            index: self.index,
        }
    }
}

/// Immutable table of commands, in registration order
#[derive(Debug)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::default()
    }

    /// Registry holding the `analyze` command
    pub fn with_default_commands(analyzer: ColorAnalyzer, source: Arc<dyn ImageSource>) -> Result<Self> {
        Ok(Self::builder()
            .register(ANALYZE_COMMAND, validate_analyze, AnalyzeExecutor::new(analyzer, source))?
            .build())
    }

    /// # Errors
    ///
    /// Returns `AnalysisError::CommandNotValid` for unknown names.
    pub fn lookup(&self, name: &str) -> Result<&CommandEntry> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| AnalysisError::CommandNotValid {
                command: name.to_string(),
            })
    }

    pub fn list_commands(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InstructionsProvider for CommandRegistry {
    fn list_commands(&self) -> Vec<&str> {
        CommandRegistry::list_commands(self)
    }
}
