use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub output: PathBuf,
    pub rows_kept: usize,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filtered and sorted CSV created successfully at {}", self.output.display())
    }
}
