use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::app::ports::{CorpusSinkPort, CorpusSourcePort};
use crate::error::{CleanerError, Result};

/// File-based implementation of the corpus ports.
/// Reads and writes whole UTF-8 files.
#[derive(Debug, Clone)]
pub struct FsCorpusAdapter {
    create_parent_dirs: bool,
}

impl FsCorpusAdapter {
    pub fn new(create_parent_dirs: bool) -> Self {
        Self { create_parent_dirs }
    }
}

impl Default for FsCorpusAdapter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CorpusSourcePort for FsCorpusAdapter {
    fn read_corpus(&self, location: &Path) -> Result<String> {
        let text = fs::read_to_string(location).map_err(|source| CleanerError::Read {
            path: location.to_path_buf(),
            source,
        })?;
        debug!(path = %location.display(), bytes = text.len(), "Read corpus");
        Ok(text)
    }
}

impl CorpusSinkPort for FsCorpusAdapter {
    fn write_corpus(&self, location: &Path, text: &str) -> Result<()> {
        let write_error = |source| CleanerError::Write {
            path: location.to_path_buf(),
            source,
        };

        if self.create_parent_dirs {
            if let Some(dir) = location.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(write_error)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(location)
            .map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes()).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        debug!(path = %location.display(), bytes = text.len(), "Wrote corpus");
        Ok(())
    }
}
