use std::path::Path;
use log::debug;
use crate::cities::{self, FilterReport};
use crate::embed::{self, EmbedReport};
use crate::error::types::Result;
use super::config::{EmbedConfig, FilterConfig};

/// Operations exposed by the two asset tools.
///
/// # Examples
///
/// ```no_run
/// use asset_tools::core::{ToolsApi, ToolsApiOps};
/// use std::path::Path;
///
/// let api = ToolsApi::new();
///
/// // Compile a font into the binary
/// let report = api.embed_file(Path::new("font.bin"), Path::new("font_data.h")).unwrap();
/// println!("{}", report);
///
/// // Cities with at least 50k people
/// api.filter_cities(Path::new("cities15000.txt"), Path::new("cities.csv"), Some(50_000)).unwrap();
/// ```
pub trait ToolsApiOps {
    /// Write `input` as a C byte array named after `output`
    fn embed_file(&self, input: &Path, output: &Path) -> Result<EmbedReport>;

    /// Filter a gazetteer into a sorted CSV; `threshold` overrides the configured one
    fn filter_cities(&self, input: &Path, output: &Path, threshold: Option<i64>) -> Result<FilterReport>;
}

/// Default implementation of [`ToolsApiOps`] carrying one configuration per tool.
///
/// ```no_run
/// use asset_tools::core::{EmbedConfig, ToolsApi};
///
/// let api = ToolsApi::builder()
///     .with_embed_config(EmbedConfig::builder().bytes_per_line(16).build())
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolsApi {
    embed_config: EmbedConfig,
    filter_config: FilterConfig,
}

impl ToolsApi {
    pub fn builder() -> ToolsApiBuilder {
        ToolsApiBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl ToolsApiOps for ToolsApi {
    fn embed_file(&self, input: &Path, output: &Path) -> Result<EmbedReport> {
        debug!("Embedding {} into {}", input.display(), output.display());
        embed::embed_file(input, output, &self.embed_config)
    }

    fn filter_cities(&self, input: &Path, output: &Path, threshold: Option<i64>) -> Result<FilterReport> {
        debug!("Filtering {} into {} (threshold override: {:?})", input.display(), output.display(), threshold);
        match threshold {
            Some(threshold) => cities::filter_cities(input, output, &self.filter_config.with_threshold(threshold)),
            None => cities::filter_cities(input, output, &self.filter_config),
        }
    }
}

#[derive(Default)]
pub struct ToolsApiBuilder {
    embed_config: Option<EmbedConfig>,
    filter_config: Option<FilterConfig>,
}

impl ToolsApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embed_config(mut self, config: EmbedConfig) -> Self {
        self.embed_config = Some(config);
        self
    }

    pub fn with_filter_config(mut self, config: FilterConfig) -> Self {
        self.filter_config = Some(config);
        self
    }

    pub fn build(self) -> ToolsApi {
        ToolsApi {
            embed_config: self.embed_config.unwrap_or_default(),
            filter_config: self.filter_config.unwrap_or_default(),
        }
    }
}
