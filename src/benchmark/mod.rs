//! Experiment orchestration and measurement.
//!
//! Everything needed to turn the structures into comparable numbers:
//!
//! - **Datasets**: seeded batches of unique-key records
//! - **Sampling**: order-preserving selection sampling for search workloads
//! - **Metrics**: wall-clock time, peak-RSS memory deltas, iteration counts
//! - **Runner**: the full size x structure x configuration x round matrix
//!
//! One round = one fresh structure instance, one timed bulk insert, one
//! timed search pass over a sample drawn without replacement. Rounds
//! repeat per configuration and are averaged into the summary statistics.

pub mod dataset;
pub mod metrics;
pub mod runner;
pub mod sampling;

pub use dataset::generate_records;
pub use metrics::{MetricsCollector, PerformanceMetrics};
pub use runner::{
    ExperimentConfig, ExperimentResult, ExperimentRunner, Operation, StructureVariant,
};
pub use sampling::sample_without_replacement;
