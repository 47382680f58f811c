use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to open output file '{path}': {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {source}")]
    StdoutError { source: std::io::Error },
}

impl IoError {
    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn stdout_error(source: std::io::Error) -> Self {
        Self::StdoutError { source }
    }
}
