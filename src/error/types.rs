use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Input file '{}' not found", .0.display())]
    InvalidPath(PathBuf),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),

    #[error("City filter error: {0}")]
    Cities(#[from] CityError),
}

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("Failed to read file {}: {reason}", .path.display())]
    ReadFile {
        path: PathBuf,
        reason: String,
    },

    #[error("Error writing to output file '{}': {reason}", .path.display())]
    WriteFile {
        path: PathBuf,
        reason: String,
    },

    #[error("Cannot open output file '{}' for writing: {reason}", .path.display())]
    CreateFile {
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to move finished output into place at {}: {reason}", .path.display())]
    Persist {
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("'{0}' is not a valid C identifier")]
    InvalidIdentifier(String),
}

#[derive(Error, Debug)]
pub enum CityError {
    #[error("Malformed input on line {line}: {reason}")]
    Csv {
        line: u64,
        reason: String,
    },

    #[error("Line {line} has {found} columns, column {index} is required")]
    MissingColumn {
        line: u64,
        index: usize,
        found: usize,
    },

    #[error("Failed to write CSV output: {0}")]
    Write(String),
}

impl From<csv::Error> for CityError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        CityError::Csv {
            line,
            reason: err.to_string(),
        }
    }
}

impl From<csv::Error> for ToolError {
    fn from(err: csv::Error) -> Self {
        ToolError::Cities(CityError::from(err))
    }
}
