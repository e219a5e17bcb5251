pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod observability;
pub mod pipeline;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub use error::{CleanerError, Result};
pub use pipeline::normalize::{normalize, CorpusNormalizer, Normalizer, Stage};
