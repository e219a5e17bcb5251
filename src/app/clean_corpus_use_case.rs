use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

use crate::app::ports::{CorpusSinkPort, CorpusSourcePort};
use crate::error::Result;
use crate::observability::metrics;
use crate::pipeline::processing::corpus;
use crate::pipeline::processing::normalize::{CorpusNormalizer, Normalizer};

/// Outcome of one clean run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub token_count: usize,
}

/// Use case for cleaning one raw corpus file into one normalized corpus file
pub struct CleanCorpusUseCase {
    source: Box<dyn CorpusSourcePort>,
    sink: Box<dyn CorpusSinkPort>,
    normalizer: Box<dyn Normalizer + Send + Sync>,
}

impl CleanCorpusUseCase {
    pub fn new(
        source: Box<dyn CorpusSourcePort>,
        sink: Box<dyn CorpusSinkPort>,
        normalizer: Box<dyn Normalizer + Send + Sync>,
    ) -> Self {
        Self {
            source,
            sink,
            normalizer,
        }
    }

    /// Create a use case with the default normalizer
    pub fn with_default_normalizer(
        source: Box<dyn CorpusSourcePort>,
        sink: Box<dyn CorpusSinkPort>,
    ) -> Self {
        Self::new(source, sink, Box::new(CorpusNormalizer))
    }

    /// Read `input`, normalize it, and write the result to `output`.
    ///
    /// Nothing is written when the read fails. A failed write is not retried.
    pub fn run(&self, input: &Path, output: &Path) -> Result<CleanReport> {
        let started = Instant::now();

        let raw = self.source.read_corpus(input).map_err(|e| {
            error!("Failed to read raw corpus: {}", e);
            metrics::clean::read_error();
            e
        })?;

        let cleaned = self.normalizer.normalize(&raw);

        self.sink.write_corpus(output, &cleaned).map_err(|e| {
            error!("Failed to write cleaned corpus: {}", e);
            metrics::clean::write_error();
            e
        })?;

        let report = CleanReport {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            input_bytes: raw.len(),
            output_bytes: cleaned.len(),
            token_count: corpus::tokens(&cleaned).count(),
        };

        metrics::clean::document_cleaned(
            report.input_bytes,
            report.output_bytes,
            report.token_count,
            started.elapsed().as_secs_f64(),
        );
        info!("Cleaned corpus written to {}", output.display());

        Ok(report)
    }
}
