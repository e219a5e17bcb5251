//! Word-level view of a cleaned corpus.
//!
//! Downstream embedding models read the corpus as whitespace-separated words
//! and index each distinct word by first occurrence. This module builds the
//! same index so a cleaned corpus can be inspected before training.

use serde::Serialize;
use std::collections::HashMap;

/// Split corpus text into words
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Distinct words of a corpus, indexed in first-seen order with occurrence counts
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    index_of: HashMap<String, usize>,
    words: Vec<String>,
    counts: Vec<usize>,
}

impl Vocabulary {
    pub fn build<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            match vocab.index_of.get(token) {
                Some(&index) => vocab.counts[index] += 1,
                None => {
                    vocab.index_of.insert(token.to_string(), vocab.words.len());
                    vocab.words.push(token.to_string());
                    vocab.counts.push(1);
                }
            }
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index_of.get(word).copied()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn count(&self, word: &str) -> usize {
        self.index_of(word).map_or(0, |index| self.counts[index])
    }

    /// The `n` most frequent words, highest count first.
    /// Ties keep first-seen order.
    pub fn most_frequent(&self, n: usize) -> Vec<WordFrequency> {
        let mut ranked: Vec<usize> = (0..self.words.len()).collect();
        ranked.sort_by(|&a, &b| self.counts[b].cmp(&self.counts[a]).then(a.cmp(&b)));
        ranked
            .into_iter()
            .take(n)
            .map(|index| WordFrequency {
                word: self.words[index].clone(),
                count: self.counts[index],
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Summary of a corpus as the downstream model would see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub token_count: usize,
    pub vocabulary_size: usize,
    pub most_frequent: Vec<WordFrequency>,
}

impl CorpusSummary {
    pub fn from_text(text: &str, top_n: usize) -> Self {
        let vocab = Vocabulary::build(tokens(text));
        Self {
            token_count: tokens(text).count(),
            vocabulary_size: vocab.len(),
            most_frequent: vocab.most_frequent(top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_indexes_in_first_seen_order() {
        let vocab = Vocabulary::build(tokens("the cat saw the dog and the cat"));
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.index_of("the"), Some(0));
        assert_eq!(vocab.index_of("cat"), Some(1));
        assert_eq!(vocab.index_of("dog"), Some(3));
        assert_eq!(vocab.index_of("bird"), None);
        assert_eq!(vocab.word(4), Some("and"));
        assert_eq!(vocab.word(5), None);
        assert_eq!(vocab.count("the"), 3);
        assert_eq!(vocab.count("bird"), 0);
    }

    #[test]
    fn test_most_frequent_breaks_ties_by_first_seen() {
        let vocab = Vocabulary::build(tokens("b a b a c"));
        let top = vocab.most_frequent(2);
        assert_eq!(
            top,
            vec![
                WordFrequency { word: "b".to_string(), count: 2 },
                WordFrequency { word: "a".to_string(), count: 2 },
            ]
        );
        assert_eq!(vocab.most_frequent(10).len(), 3);
    }

    #[test]
    fn test_summary_of_empty_corpus() {
        let summary = CorpusSummary::from_text("", 5);
        assert_eq!(summary.token_count, 0);
        assert_eq!(summary.vocabulary_size, 0);
        assert!(summary.most_frequent.is_empty());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = CorpusSummary::from_text("don't stop don't", 1);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["token_count"], 3);
        assert_eq!(json["vocabulary_size"], 2);
        assert_eq!(json["most_frequent"][0]["word"], "don't");
        assert_eq!(json["most_frequent"][0]["count"], 2);
    }
}
