use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{IoError, OutputError, Result};

use super::StepOutput;

pub struct OutputFormatter;

impl OutputFormatter {
    /// Renders a single line, without the trailing newline.
    pub fn format(output: &StepOutput, format: OutputFormat) -> Result<String> {
        let line = match format {
            OutputFormat::KeyValue => format!("{}::{}", output.key, output.value),
            OutputFormat::SetOutput => {
                format!("::set-output name={}::{}", output.key, output.value)
            }
            OutputFormat::GithubOutput => format!("{}={}", output.key, output.value),
            OutputFormat::Json => serde_json::to_string(output).map_err(OutputError::from)?,
        };
        Ok(line)
    }

    /// Writes `line` to stdout and, when given, appends it to `output_file`.
    pub fn emit(line: &str, output_file: Option<&Path>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}").map_err(IoError::stdout_error)?;
        handle.flush().map_err(IoError::stdout_error)?;

        if let Some(path) = output_file {
            Self::append(path, line)?;
        }
        Ok(())
    }

    /// Appends `line` plus a newline, creating the file if needed.
    pub fn append(path: &Path, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| IoError::open_error(path, e))?;

        writeln!(file, "{line}").map_err(|e| IoError::write_error(path, e))?;
        tracing::debug!(path = %path.display(), "appended step output");
        Ok(())
    }
}
