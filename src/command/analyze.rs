//! The `analyze` command: bucket percentages of an image file

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use super::registry::CommandExecutor;
use super::result::CommandOutput;
use crate::color::ColorAnalyzer;
use crate::image_loader::ImageSource;
use crate::{AnalysisError, Result};

/// Require one argument naming a readable file; extra arguments are dropped
pub fn validate_analyze(command: &str, args: &[String]) -> Result<Vec<String>> {
    let path = args.first().ok_or_else(|| AnalysisError::EmptyArguments {
        command: command.to_string(),
    })?;

    if !is_readable_file(Path::new(path)) {
        return Err(AnalysisError::InvalidPath {
            path: PathBuf::from(path),
        });
    }

    if args.len() > 1 {
        debug!("Ignoring {} extra argument(s) to '{}'", args.len() - 1, command);
    }

    Ok(vec![path.clone()])
}

fn is_readable_file(path: &Path) -> bool {
    File::open(path)
        .and_then(|file| file.metadata())
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Decodes the image at the first argument and analyzes it
pub struct AnalyzeExecutor {
    analyzer: ColorAnalyzer,
    source: Arc<dyn ImageSource>,
}

impl AnalyzeExecutor {
    pub fn new(analyzer: ColorAnalyzer, source: Arc<dyn ImageSource>) -> Self {
        Self { analyzer, source }
    }
}

impl CommandExecutor for AnalyzeExecutor {
    fn execute(&self, args: &[String]) -> Result<CommandOutput> {
        let path = args.first().map(Path::new).ok_or_else(|| AnalysisError::EmptyArguments {
            command: crate::constants::ANALYZE_COMMAND.to_string(),
        })?;

        let image = self.source.decode(path)?;
        info!("Analyzing {} ({}x{})", path.display(), image.width(), image.height());

        let percentages = self.analyzer.analyze(&image)?;
        Ok(CommandOutput::ColorPercentages(percentages))
    }
}
