// Observability: metrics recording and rendering

pub mod metrics;

pub use metrics::{init, render};
