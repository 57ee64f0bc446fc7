use super::constants::*;

#[derive(Debug, Clone)]
pub struct EmbedConfig {
    length_type: String,
    element_type: String,
    bytes_per_line: Option<usize>,
    sanitize_identifiers: bool,
}

impl EmbedConfig {
    pub fn builder() -> EmbedConfigBuilder {
        EmbedConfigBuilder::new()
    }

    pub fn length_type(&self) -> &str {
        &self.length_type
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn bytes_per_line(&self) -> Option<usize> {
        self.bytes_per_line
    }

    pub fn sanitize_identifiers(&self) -> bool {
        self.sanitize_identifiers
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub struct EmbedConfigBuilder {
    length_type: String,
    element_type: String,
    bytes_per_line: Option<usize>,
    sanitize_identifiers: bool,
}

impl EmbedConfigBuilder {
    pub fn new() -> Self {
        Self {
            length_type: DEFAULT_LENGTH_TYPE.to_string(),
            element_type: DEFAULT_ELEMENT_TYPE.to_string(),
            bytes_per_line: None,
            sanitize_identifiers: true,
        }
    }

    pub fn length_type(mut self, c_type: impl Into<String>) -> Self {
        self.length_type = c_type.into();
        self
    }

    pub fn element_type(mut self, c_type: impl Into<String>) -> Self {
        self.element_type = c_type.into();
        self
    }

    /// Wrap the byte literals every `count` bytes. Zero keeps everything on one line.
    pub fn bytes_per_line(mut self, count: usize) -> Self {
        self.bytes_per_line = if count == 0 { None } else { Some(count) };
        self
    }

    pub fn sanitize_identifiers(mut self, sanitize: bool) -> Self {
        self.sanitize_identifiers = sanitize;
        self
    }

    pub fn build(self) -> EmbedConfig {
        EmbedConfig {
            length_type: self.length_type,
            element_type: self.element_type,
            bytes_per_line: self.bytes_per_line,
            sanitize_identifiers: self.sanitize_identifiers,
        }
    }
}

impl Default for EmbedConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions of the fields the city filter reads from each gazetteer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub country_code: usize,
    pub population: usize,
    pub timezone: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: NAME_COLUMN,
            latitude: LATITUDE_COLUMN,
            longitude: LONGITUDE_COLUMN,
            country_code: COUNTRY_CODE_COLUMN,
            population: POPULATION_COLUMN,
            timezone: TIMEZONE_COLUMN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterConfig {
    population_threshold: i64,
    name_replacements: Vec<(String, String)>,
    columns: ColumnLayout,
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }

    pub fn population_threshold(&self) -> i64 {
        self.population_threshold
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn name_replacements(&self) -> &[(String, String)] {
        &self.name_replacements
    }

    /// Applies every configured literal replacement, in insertion order.
    pub fn clean_name(&self, raw: &str) -> String {
        self.name_replacements
            .iter()
            .fold(raw.to_string(), |name, (from, to)| name.replace(from.as_str(), to))
    }

    pub(crate) fn with_threshold(&self, threshold: i64) -> Self {
        Self {
            population_threshold: threshold,
            ..self.clone()
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub struct FilterConfigBuilder {
    population_threshold: i64,
    name_replacements: Vec<(String, String)>,
    columns: ColumnLayout,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self {
            population_threshold: DEFAULT_POPULATION_THRESHOLD,
            name_replacements: vec![(MOJIBAKE_APOSTROPHE.to_string(), "'".to_string())],
            columns: ColumnLayout::default(),
        }
    }

    pub fn population_threshold(mut self, threshold: i64) -> Self {
        self.population_threshold = threshold;
        self
    }

    pub fn add_name_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        if !from.is_empty() {
            self.name_replacements.push((from, to.into()));
        }
        self
    }

    pub fn columns(mut self, columns: ColumnLayout) -> Self {
        self.columns = columns;
        self
    }

    pub fn build(self) -> FilterConfig {
        FilterConfig {
            population_threshold: self.population_threshold,
            name_replacements: self.name_replacements,
            columns: self.columns,
        }
    }
}

impl Default for FilterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
