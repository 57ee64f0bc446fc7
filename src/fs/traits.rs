use std::path::Path;
use log::debug;
use crate::error::types::{FileSystemError, Result, ToolError};

pub trait FileOperation {
    /// Fails with `InvalidPath` for a missing path and `ReadFile` for a directory.
    /// Anything else (regular files, FIFOs, character devices) is left to the reader.
    fn require_file(&self) -> Result<()>;
    fn file_stem_str(&self) -> Result<&str>;
}

impl FileOperation for Path {
    fn require_file(&self) -> Result<()> {
        if !self.exists() {
            debug!("Input path does not exist: {}", self.display());
            return Err(ToolError::InvalidPath(self.to_path_buf()));
        }
        if self.is_dir() {
            return Err(ToolError::FileSystem(FileSystemError::ReadFile {
                path: self.to_path_buf(),
                reason: "is a directory".to_string(),
            }));
        }
        Ok(())
    }

    fn file_stem_str(&self) -> Result<&str> {
        self.file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| {
                ToolError::FileSystem(FileSystemError::InvalidFileName(
                    self.to_string_lossy().into_owned(),
                ))
            })
    }
}
