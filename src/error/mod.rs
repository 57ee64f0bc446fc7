pub mod types;

/// Wraps an `io::Result` into the matching `FileSystemError` variant for `$path`.
#[macro_export]
macro_rules! fs_err {
    ($result:expr, $op:ident, $path:expr) => {
        $result.map_err(|e| {
            $crate::error::types::ToolError::FileSystem($crate::error::types::FileSystemError::$op {
                path: $path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    };
}

pub use types::*;
