use std::path::Path;

use crate::error::Result;

/// Where raw corpus text comes from. Reads the whole document at once.
pub trait CorpusSourcePort: Send + Sync {
    fn read_corpus(&self, location: &Path) -> Result<String>;
}

/// Where cleaned corpus text goes. Replaces any existing content.
pub trait CorpusSinkPort: Send + Sync {
    fn write_corpus(&self, location: &Path, text: &str) -> Result<()>;
}
