// Corpus pipeline: normalization and the downstream word view

pub mod processing;

// Re-export key types and functions from each stage
pub use processing::corpus;
pub use processing::normalize;
