use std::path::Path;
use tracing::info;

use crate::app::ports::CorpusSourcePort;
use crate::error::Result;
use crate::pipeline::processing::corpus::CorpusSummary;

/// Use case for summarizing a corpus the way the downstream model reads it
pub struct CorpusStatsUseCase {
    source: Box<dyn CorpusSourcePort>,
}

impl CorpusStatsUseCase {
    pub fn new(source: Box<dyn CorpusSourcePort>) -> Self {
        Self { source }
    }

    pub fn summarize(&self, location: &Path, top_n: usize) -> Result<CorpusSummary> {
        let text = self.source.read_corpus(location)?;
        let summary = CorpusSummary::from_text(&text, top_n);
        info!(
            path = %location.display(),
            tokens = summary.token_count,
            vocabulary = summary.vocabulary_size,
            "Corpus summarized"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanerError;

    struct FixedSource(&'static str);

    impl CorpusSourcePort for FixedSource {
        fn read_corpus(&self, _location: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct MissingSource;

    impl CorpusSourcePort for MissingSource {
        fn read_corpus(&self, location: &Path) -> Result<String> {
            Err(CleanerError::Read {
                path: location.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    #[test]
    fn test_summarize_counts_tokens_and_vocabulary() {
        let use_case = CorpusStatsUseCase::new(Box::new(FixedSource("the king and the queen")));
        let summary = use_case.summarize(Path::new("any"), 1).unwrap();
        assert_eq!(summary.token_count, 5);
        assert_eq!(summary.vocabulary_size, 4);
        assert_eq!(summary.most_frequent[0].word, "the");
    }

    #[test]
    fn test_summarize_propagates_read_errors() {
        let use_case = CorpusStatsUseCase::new(Box::new(MissingSource));
        let result = use_case.summarize(Path::new("missing"), 3);
        assert!(matches!(result, Err(CleanerError::Read { .. })));
    }
}
