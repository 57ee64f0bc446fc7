pub mod cities;
pub mod cli;
pub mod core;
pub mod embed;
pub mod error;
pub mod fs;

pub use crate::core::api::{ToolsApi, ToolsApiOps};
pub use crate::core::config::{EmbedConfig, FilterConfig};
pub use crate::error::types::{ToolError, FileSystemError, EmbedError, CityError, Result};
