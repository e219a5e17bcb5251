pub mod rules;

use std::time::Instant;
use tracing::debug;

/// The ordered stages of corpus normalization.
/// Each stage consumes the output of the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CaseFold,
    MojibakeApostrophe,
    Possessive,
    StrayApostrophe,
    NonCorpusChars,
    Whitespace,
}

impl Stage {
    /// All stages in the order they are applied
    pub const ALL: [Stage; 6] = [
        Stage::CaseFold,
        Stage::MojibakeApostrophe,
        Stage::Possessive,
        Stage::StrayApostrophe,
        Stage::NonCorpusChars,
        Stage::Whitespace,
    ];

    /// Stable label used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CaseFold => "case_fold",
            Stage::MojibakeApostrophe => "mojibake_apostrophe",
            Stage::Possessive => "possessive",
            Stage::StrayApostrophe => "stray_apostrophe",
            Stage::NonCorpusChars => "non_corpus_chars",
            Stage::Whitespace => "whitespace",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Stage::CaseFold => rules::fold_case(text),
            Stage::MojibakeApostrophe => rules::repair_mojibake_apostrophe(text),
            Stage::Possessive => rules::strip_possessives(text),
            Stage::StrayApostrophe => rules::strip_stray_apostrophes(text),
            Stage::NonCorpusChars => rules::strip_non_corpus_chars(text),
            Stage::Whitespace => rules::collapse_whitespace(text),
        }
    }
}

/// Normalize raw text into the corpus alphabet: lowercase `a`-`z`, digits,
/// in-word apostrophes and single spaces, with no leading or trailing space.
///
/// Total over all inputs; the empty string maps to itself.
pub fn normalize(input: &str) -> String {
    Stage::ALL
        .iter()
        .fold(input.to_string(), |text, stage| stage.apply(&text))
}

/// Trait for turning raw corpus text into normalized corpus text
pub trait Normalizer {
    fn normalize(&self, text: &str) -> String;
}

/// Default normalizer running every stage in order, tracing each one
#[derive(Debug, Default, Clone, Copy)]
pub struct CorpusNormalizer;

impl Normalizer for CorpusNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in Stage::ALL {
            let started = Instant::now();
            let bytes_before = current.len();
            current = stage.apply(&current);
            crate::observability::metrics::normalize::stage_completed(
                stage.name(),
                started.elapsed().as_secs_f64(),
            );
            debug!(
                stage = stage.name(),
                bytes_before,
                bytes_after = current.len(),
                "Normalization stage applied"
            );
        }
        current
    }
}
