use std::path::Path;
use log::debug;
use crate::error::types::{FileSystemError, Result, ToolError};

#[derive(Debug, Clone, Default)]
pub struct BinaryContent(Vec<u8>);

impl BinaryContent {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolError::InvalidPath(path.to_path_buf())
            } else {
                ToolError::FileSystem(FileSystemError::ReadFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(Self(content))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub trait ReadBinaryContent {
    fn read_binary(&self) -> Result<BinaryContent>;
}

impl ReadBinaryContent for Path {
    fn read_binary(&self) -> Result<BinaryContent> {
        BinaryContent::from_file(self)
    }
}
