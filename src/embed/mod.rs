//! Renders arbitrary files as C byte-array sources for compiling assets into a program.

mod name;
mod render;
mod result;

pub use name::ArrayName;
pub use render::render_array;
pub use result::EmbedReport;

use std::io::Write;
use std::path::Path;
use log::{debug, info};
use crate::core::config::EmbedConfig;
use crate::error::types::Result;
use crate::fs::{write_atomically, FileOperation, ReadBinaryContent};
use crate::fs_err;

/// Reads `input` and writes its bytes to `output` as a C array named after `output`.
pub fn embed_file(input: &Path, output: &Path, config: &EmbedConfig) -> Result<EmbedReport> {
    input.require_file()?;
    let name = ArrayName::from_output_path(output, config.sanitize_identifiers())?;
    let content = input.read_binary()?;

    debug!("Rendering {} bytes as '{}'", content.len(), name);
    let source = render_array(&name, content.as_bytes(), config);

    write_atomically(output, |writer: &mut dyn Write| {
        fs_err!(writer.write_all(source.as_bytes()), WriteFile, output)
    })?;

    info!("Embedded {} ({} bytes) into {}", input.display(), content.len(), output.display());
    Ok(EmbedReport {
        output: output.to_path_buf(),
        array_name: name.to_string(),
        length_name: name.length_name(),
        byte_count: content.len(),
    })
}
