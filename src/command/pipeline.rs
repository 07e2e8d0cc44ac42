//! Validate → execute → emit orchestration
//!
//! Each call to [`CommandPipeline::execute`] runs to completion and stops at
//! the first failure. The sink sees a result only when every stage succeeded;
//! failures are returned to the caller, which can re-prompt on recoverable
//! errors or report through [`CommandPipeline::report_error`].

use std::sync::Arc;

use log::{debug, info, warn};

use super::registry::CommandRegistry;
use super::result::CommandResult;
use super::sink::{InstructionsProvider, ResultSink};
use crate::color::ColorAnalyzer;
use crate::config::AnalysisConfig;
use crate::image_loader::FileImageSource;
use crate::{AnalysisError, Result};

pub struct CommandPipeline<S: ResultSink> {
    registry: CommandRegistry,
    sink: S,
}

impl<S: ResultSink> CommandPipeline<S> {
    pub fn new(registry: CommandRegistry, sink: S) -> Self {
        Self { registry, sink }
    }

    /// Pipeline with the default commands, decoding images from disk
    pub fn with_defaults(config: &AnalysisConfig, sink: S) -> Result<Self> {
        let registry = CommandRegistry::with_default_commands(
            ColorAnalyzer::with_config(config),
            Arc::new(FileImageSource),
        )?;
        Ok(Self::new(registry, sink))
    }

    /// Run `command` on `raw_args` and hand the result to the sink.
    ///
    /// # Errors
    ///
    /// - `CommandNotValid` if no such command is registered
    /// - any error raised by the command's validator or executor
    pub fn execute(&mut self, command: &str, raw_args: &[String]) -> Result<CommandResult> {
        let entry = self.registry.lookup(command)?;

        debug!("Validating '{}' with {} argument(s)", command, raw_args.len());
        let args = entry.validate(raw_args)?;

        info!("Executing '{}'", command);
        let output = entry.execute(&args)?;

        let result = CommandResult::new(entry.name(), output);
        self.sink.on_result(&result);

        Ok(result)
    }

    /// Forward a failure to the sink as `(kind, message)`
    pub fn report_error(&mut self, error: &AnalysisError) {
        warn!("Command failed: {}", error);
        self.sink.on_error(error.kind(), &error.to_string());
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ResultSink> InstructionsProvider for CommandPipeline<S> {
    fn list_commands(&self) -> Vec<&str> {
        self.registry.list_commands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::result::CommandOutput;
    use crate::command::sink::RecordingSink;
    use crate::color::ColorPercentages;
    use crate::error::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn default_pipeline() -> CommandPipeline<RecordingSink> {
        CommandPipeline::with_defaults(&AnalysisConfig::default(), RecordingSink::default()).unwrap()
    }

    #[test]
    fn test_unknown_command() {
        let mut pipeline = default_pipeline();
        match pipeline.execute("bogus", &["x.png".to_string()]) {
            Err(AnalysisError::CommandNotValid { command }) => assert_eq!(command, "bogus"),
            other => panic!("Expected CommandNotValid, got: {:?}", other),
        }
        assert!(pipeline.sink().results.is_empty());
    }

    #[test]
    fn test_analyze_without_arguments() {
        let mut pipeline = default_pipeline();
        assert!(matches!(
            pipeline.execute("analyze", &[]),
            Err(AnalysisError::EmptyArguments { .. })
        ));
    }

    #[test]
    fn test_analyze_missing_file() {
        let mut pipeline = default_pipeline();
        let err = pipeline.execute("analyze", &["/no/such/file".to_string()]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidPath { .. }));
        assert!(err.is_recoverable());
        assert!(pipeline.sink().results.is_empty());
    }

    #[test]
    fn test_validation_failure_skips_executor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let registry = CommandRegistry::builder()
            .register(
                "strict",
                |command: &str, _: &[String]| -> Result<Vec<String>> {
                    Err(AnalysisError::EmptyArguments {
                        command: command.to_string(),
                    })
                },
                move |_: &[String]| -> Result<CommandOutput> {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(ColorPercentages {
                        red: 0.0,
                        green: 0.0,
                        blue: 0.0,
                    }
                    .into())
                },
            )
            .unwrap()
            .build();

        let mut pipeline = CommandPipeline::new(registry, RecordingSink::default());
        assert!(pipeline.execute("strict", &[]).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_each_success_reaches_sink_once() {
        let registry = CommandRegistry::builder()
            .register(
                "first",
                |_: &str, args: &[String]| -> Result<Vec<String>> { Ok(args.to_vec()) },
                |_: &[String]| -> Result<CommandOutput> {
                    Ok(ColorPercentages {
                        red: 1.0,
                        green: 0.0,
                        blue: 0.0,
                    }
                    .into())
                },
            )
            .unwrap()
            .register(
                "second",
                |_: &str, args: &[String]| -> Result<Vec<String>> { Ok(args.to_vec()) },
                |_: &[String]| -> Result<CommandOutput> {
                    Ok(ColorPercentages {
                        red: 0.0,
                        green: 2.0,
                        blue: 0.0,
                    }
                    .into())
                },
            )
            .unwrap()
            .build();

        let mut pipeline = CommandPipeline::new(registry, RecordingSink::default());
        let result = pipeline.execute("second", &[]).unwrap();
        pipeline.execute("first", &[]).unwrap();

        assert_eq!(result.command, "second");
        let sink = pipeline.into_sink();
        let commands: Vec<&str> = sink.results.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["second", "first"]);
        assert_eq!(sink.results[0], result);
    }

    #[test]
    fn test_report_error_reaches_sink() {
        let mut pipeline = default_pipeline();
        let err = pipeline.execute("bogus", &[]).unwrap_err();
        pipeline.report_error(&err);

        let (kind, message) = &pipeline.sink().errors[0];
        assert_eq!(*kind, ErrorKind::CommandNotValid);
        assert!(message.contains("bogus"));
    }

    #[test]
    fn test_instructions() {
        let pipeline = default_pipeline();
        assert_eq!(InstructionsProvider::list_commands(&pipeline), vec!["analyze"]);
    }

    #[test]
    fn test_sink_by_mutable_reference() {
        let mut sink = RecordingSink::default();
        {
            let mut pipeline = CommandPipeline::with_defaults(&AnalysisConfig::default(), &mut sink).unwrap();
            let err = pipeline.execute("analyze", &[]).unwrap_err();
            pipeline.report_error(&err);
        }
        assert_eq!(sink.errors.len(), 1);
        assert_eq!(sink.errors[0].0, ErrorKind::EmptyArguments);
    }
}
