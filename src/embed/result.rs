use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub output: PathBuf,
    pub array_name: String,
    pub length_name: String,
    pub byte_count: usize,
}

impl fmt::Display for EmbedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully generated {} with array name '{}' and length '{}'",
            self.output.display(),
            self.array_name,
            self.length_name
        )
    }
}
