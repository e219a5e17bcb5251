//! Simple metrics module for the corpus cleaner
//!
//! Metrics are recorded through the `metrics` facade. `init` installs an
//! in-process Prometheus recorder whose text exposition can be rendered on
//! demand; without it, recording is a no-op.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::fmt;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Clean metrics
    CleanDocumentsSuccess,
    CleanReadErrors,
    CleanWriteErrors,
    CleanBytesIn,
    CleanBytesOut,
    CleanTokensOut,
    CleanDuration,

    // Normalize metrics
    NormalizeStageDuration,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::CleanDocumentsSuccess => "corpus_clean_documents_success_total",
            MetricName::CleanReadErrors => "corpus_clean_read_errors_total",
            MetricName::CleanWriteErrors => "corpus_clean_write_errors_total",
            MetricName::CleanBytesIn => "corpus_clean_bytes_in",
            MetricName::CleanBytesOut => "corpus_clean_bytes_out",
            MetricName::CleanTokensOut => "corpus_clean_tokens_out",
            MetricName::CleanDuration => "corpus_clean_duration_seconds",
            MetricName::NormalizeStageDuration => "corpus_normalize_stage_duration_seconds",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            CleanDocumentsSuccess,
            CleanReadErrors,
            CleanWriteErrors,
            CleanBytesIn,
            CleanBytesOut,
            CleanTokensOut,
            CleanDuration,
            NormalizeStageDuration,
        ]
        .into_iter()
    }

    /// Returns (phase, description, unit)
    pub fn metadata(&self) -> (&'static str, &'static str, Option<&'static str>) {
        match self {
            MetricName::CleanDocumentsSuccess => ("clean", "Corpus files cleaned and written", None),
            MetricName::CleanReadErrors => ("clean", "Corpus files that could not be read", None),
            MetricName::CleanWriteErrors => ("clean", "Cleaned corpora that could not be written", None),
            MetricName::CleanBytesIn => ("clean", "Raw corpus size", Some("bytes")),
            MetricName::CleanBytesOut => ("clean", "Cleaned corpus size", Some("bytes")),
            MetricName::CleanTokensOut => ("clean", "Words in the cleaned corpus", None),
            MetricName::CleanDuration => ("clean", "End-to-end clean duration", Some("s")),
            MetricName::NormalizeStageDuration => ("normalize", "Duration of one normalization stage", Some("s")),
        }
    }
}

/// Install the in-process Prometheus recorder. Safe to call more than once.
pub fn init() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => {
            tracing::warn!("Prometheus recorder install failed (possibly already installed): {}", e);
        }
    }
}

/// Render all recorded metrics in the Prometheus text format
pub fn render() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}

// ============================================================================
// Clean Metrics
// ============================================================================

pub mod clean {
    use super::MetricName;

    pub fn document_cleaned(bytes_in: usize, bytes_out: usize, tokens_out: usize, duration_secs: f64) {
        ::metrics::counter!(MetricName::CleanDocumentsSuccess.as_str()).increment(1);
        ::metrics::histogram!(MetricName::CleanBytesIn.as_str()).record(bytes_in as f64);
        ::metrics::histogram!(MetricName::CleanBytesOut.as_str()).record(bytes_out as f64);
        ::metrics::histogram!(MetricName::CleanTokensOut.as_str()).record(tokens_out as f64);
        ::metrics::histogram!(MetricName::CleanDuration.as_str()).record(duration_secs);
    }

    pub fn read_error() {
        ::metrics::counter!(MetricName::CleanReadErrors.as_str()).increment(1);
    }

    pub fn write_error() {
        ::metrics::counter!(MetricName::CleanWriteErrors.as_str()).increment(1);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::MetricName;

    pub fn stage_completed(stage: &'static str, duration_secs: f64) {
        ::metrics::histogram!(MetricName::NormalizeStageDuration.as_str(), "stage" => stage)
            .record(duration_secs);
    }
}
