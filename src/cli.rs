use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::extractor::DEFAULT_OUTPUT_KEY;
use crate::output::validate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key::value`
    KeyValue,
    /// `::set-output name=key::value` workflow command
    SetOutput,
    /// `key=value`, the $GITHUB_OUTPUT file syntax
    GithubOutput,
    /// Single-line JSON object
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "extract-address")]
#[command(about = "Extract the public address from an issue body for a CI step output", long_about = None)]
pub struct Args {
    /// Issue body text to scan
    #[arg(value_name = "ISSUE_BODY")]
    pub issue_body: String,

    /// Output key the value is bound to
    #[arg(short, long, value_name = "KEY", default_value = DEFAULT_OUTPUT_KEY)]
    pub key: String,

    /// Output format
    #[arg(short = 'f', long, default_value = "key-value")]
    pub format: OutputFormat,

    /// Also append the output line to this file (e.g. $GITHUB_OUTPUT)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.key).context("Invalid --key")?;
        if let Some(ref output_file) = self.output_file {
            validate_output_file(output_file)?;
        }
        Ok(())
    }
}

pub fn validate_output_file(path: &Path) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!("Output file is a directory: {}", path.display());
    }

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        if !parent.is_dir() {
            anyhow::bail!("Output directory does not exist: {}", parent.display());
        }
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::KeyValue => "key-value",
            OutputFormat::SetOutput => "set-output",
            OutputFormat::GithubOutput => "github-output",
            OutputFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(issue_body: &str) -> Args {
        Args {
            issue_body: issue_body.to_string(),
            key: DEFAULT_OUTPUT_KEY.to_string(),
            format: OutputFormat::KeyValue,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_output_format_as_str() {
        assert_eq!(OutputFormat::KeyValue.as_str(), "key-value");
        assert_eq!(OutputFormat::SetOutput.as_str(), "set-output");
        assert_eq!(OutputFormat::GithubOutput.as_str(), "github-output");
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = Args::try_parse_from(["extract-address", "### Public Address\nABC"]).unwrap();
        assert_eq!(parsed.issue_body, "### Public Address\nABC");
        assert_eq!(parsed.key, "address");
        assert_eq!(parsed.format, OutputFormat::KeyValue);
        assert!(parsed.output_file.is_none());
    }

    #[test]
    fn test_parse_format_and_key() {
        let parsed = Args::try_parse_from([
            "extract-address",
            "--format",
            "set-output",
            "--key",
            "wallet",
            "body",
        ])
        .unwrap();
        assert_eq!(parsed.format, OutputFormat::SetOutput);
        assert_eq!(parsed.key, "wallet");
    }

    #[test]
    fn test_parse_missing_body_fails() {
        assert!(Args::try_parse_from(["extract-address"]).is_err());
    }

    #[test]
    fn test_parse_empty_body_allowed() {
        let parsed = Args::try_parse_from(["extract-address", ""]).unwrap();
        assert_eq!(parsed.issue_body, "");
    }

    #[test]
    fn test_verbose_flag_incremental() {
        let parsed = Args::try_parse_from(["extract-address", "-vv", "body"]).unwrap();
        assert_eq!(parsed.verbose, 2);
    }

    #[test]
    fn test_args_validate_default() {
        assert!(args("body").validate().is_ok());
    }

    #[test]
    fn test_args_validate_bad_key() {
        let mut a = args("body");
        a.key = "bad::key".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_validate_output_file_in_existing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("github_output");
        assert!(validate_output_file(&file_path).is_ok());

        fs::write(&file_path, "").unwrap();
        assert!(validate_output_file(&file_path).is_ok());
    }

    #[test]
    fn test_validate_output_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_output_file(temp_dir.path()).is_err());
    }

    #[test]
    fn test_validate_output_file_missing_parent() {
        let path = Path::new("/nonexistent/path/that/does/not/exist/out");
        assert!(validate_output_file(path).is_err());
    }

    #[test]
    fn test_validate_output_file_relative() {
        assert!(validate_output_file(Path::new("github_output")).is_ok());
    }
}
