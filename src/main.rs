//! Command-line front end for color_share
//!
//! Usage: `color_share [--config FILE | --permissive] [--json] <COMMAND> [ARGS]...`
//! Without a command, the available commands are listed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use color_share::{
    AnalysisConfig, AnalysisError, CommandOutput, CommandPipeline, CommandResult, ErrorKind,
    InstructionsProvider, ResultSink,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with bucket filters (defaults to split points of 100)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the 150/80/150 threshold set instead of the default
    #[arg(long, conflicts_with = "config")]
    permissive: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Command to run, e.g. `analyze`
    command: Option<String>,

    /// Arguments passed to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Prints results and errors to the terminal
struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    fn print_percentages(&self, result: &CommandResult) {
        let CommandOutput::ColorPercentages(percentages) = &result.output;
        println!("Results:");
        println!("Red: {:.2}%", percentages.red);
        println!("Green: {:.2}%", percentages.green);
        println!("Blue: {:.2}%", percentages.blue);
    }
}

impl ResultSink for ConsoleSink {
    fn on_result(&mut self, result: &CommandResult) {
        if self.json {
            match serde_json::to_string_pretty(result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing result: {}", e);
                    self.print_percentages(result);
                }
            }
            return;
        }

        match result.output {
            CommandOutput::ColorPercentages(_) => self.print_percentages(result),
        }
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        eprintln!("Error ({:?}): {}", kind, message);
    }
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig, AnalysisError> {
    match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AnalysisConfig::from_json_file(path)
        }
        None if cli.permissive => Ok(AnalysisConfig::permissive()),
        None => Ok(AnalysisConfig::default()),
    }
}

fn print_instructions(provider: &impl InstructionsProvider) {
    println!("Available commands:");
    for command in provider.list_commands() {
        println!("- {}", command);
    }
}

/// How a run that did not hit an unreported error ended
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Success,
    /// The command failed and the failure was already shown through the sink
    Reported,
}

fn run(cli: Cli) -> Result<Outcome, AnalysisError> {
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(Outcome::Success);
    }

    let mut pipeline = CommandPipeline::with_defaults(&config, ConsoleSink { json: cli.json })?;

    let Some(command) = cli.command.as_deref() else {
        print_instructions(&pipeline);
        return Ok(Outcome::Success);
    };

    match pipeline.execute(command, &cli.args) {
        Ok(_) => Ok(Outcome::Success),
        Err(error) => {
            pipeline.report_error(&error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            Ok(Outcome::Reported)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Reported) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("{}", error.user_message());
            ExitCode::FAILURE
        }
    }
}
