use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use log::warn;
use regex::Regex;
use crate::core::constants::LENGTH_SUFFIX;
use crate::error::types::{EmbedError, Result, ToolError};
use crate::fs::FileOperation;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("character class compiles"));

/// C identifier for the generated array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayName(String);

impl ArrayName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(ToolError::Embed(EmbedError::InvalidIdentifier(name)));
        }
        Ok(Self(name))
    }

    /// Derives the name from the output file's base name without its last extension,
    /// so `assets/font_data.h` gives `font_data`.
    pub fn from_output_path(path: &Path, sanitize: bool) -> Result<Self> {
        let stem = path.file_stem_str()?;
        if is_identifier(stem) {
            return Ok(Self(stem.to_string()));
        }
        if !sanitize {
            return Err(ToolError::Embed(EmbedError::InvalidIdentifier(stem.to_string())));
        }

        let sanitized = sanitize_identifier(stem);
        warn!("'{}' is not a valid C identifier, using '{}'", stem, sanitized);
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn length_name(&self) -> String {
        format!("{}{}", self.0, LENGTH_SUFFIX)
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

// Result always matches IDENTIFIER for a non-empty input
fn sanitize_identifier(name: &str) -> String {
    let replaced = INVALID_CHARS.replace_all(name, "_");
    if replaced.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", replaced)
    } else {
        replaced.into_owned()
    }
}
