//! Experiment orchestration.
//!
//! The runner walks the full measurement matrix: for every configured
//! dataset size it generates one record batch, then measures every structure
//! configuration against that batch for the configured number of rounds.
//! Each round constructs a fresh structure, times a bulk insert of the whole
//! batch, then times a search pass over a random sample of the batch. Tree
//! rounds insert a reshuffled copy so the unbalanced tree is not always fed
//! the same order; the array and the hash table insert in generation order.
//!
//! Everything random (record generation, reshuffles, search samples) flows
//! from the configured seed, so two runs with the same configuration produce
//! identical datasets, shapes, and iteration counts.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::avl::AVLTree;
use crate::bst::BinarySearchTree;
use crate::error::{BenchError, Result};
use crate::hash::{HashFunction, HashTable};
use crate::linear::LinearArray;
use crate::record::Record;

use super::dataset::generate_records;
use super::metrics::{MetricsCollector, PerformanceMetrics};
use super::sampling::sample_without_replacement;

/// Which timed phase a result describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Search,
}

impl Operation {
    /// Name as written to the `operation` report column.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Search => "search",
        }
    }
}

/// The structure configuration a result was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureVariant {
    Linear,
    Tree { balanced: bool },
    Hash { buckets: usize, function: HashFunction },
}

impl StructureVariant {
    /// Name as written to the `structure` report column.
    pub fn name(self) -> &'static str {
        match self {
            StructureVariant::Linear => "LinearArray",
            StructureVariant::Tree { balanced: false } => "BST",
            StructureVariant::Tree { balanced: true } => "AVL",
            StructureVariant::Hash { .. } => "HashTable",
        }
    }
}

/// The full experiment matrix, passed to [`ExperimentRunner::new`].
///
/// `Default` is the reference matrix: dataset sizes 1000/5000/10000, five
/// rounds, search samples capped at 1000, bucket counts 100/1000/5000 against
/// all three hash functions, seed 42.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Record counts to benchmark; one dataset is generated per entry.
    pub data_sizes: Vec<usize>,
    /// Fresh-structure repetitions per configuration cell.
    pub rounds: usize,
    /// Upper bound on the per-round search sample (capped at dataset size).
    pub search_sample_cap: usize,
    /// Bucket counts swept in the hash-table configurations.
    pub bucket_counts: Vec<usize>,
    /// Hash functions swept in the hash-table configurations.
    pub hash_functions: Vec<HashFunction>,
    /// Seed for dataset generation, reshuffling, and sampling.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_sizes: vec![1000, 5000, 10_000],
            rounds: 5,
            search_sample_cap: 1000,
            bucket_counts: vec![100, 1000, 5000],
            hash_functions: vec![
                HashFunction::Division,
                HashFunction::Multiplication,
                HashFunction::Folding,
            ],
            seed: 42,
        }
    }
}

impl ExperimentConfig {
    /// Reject configurations that cannot produce meaningful measurements.
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(BenchError::InvalidConfig(
                "round count must be at least 1".into(),
            ));
        }
        if self.search_sample_cap == 0 {
            return Err(BenchError::InvalidConfig(
                "search sample cap must be at least 1".into(),
            ));
        }
        if self.bucket_counts.iter().any(|&buckets| buckets == 0) {
            return Err(BenchError::InvalidConfig(
                "bucket counts must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Per-round measurements for one (structure, dataset size, operation) cell.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub variant: StructureVariant,
    pub data_size: usize,
    pub operation: Operation,
    /// One entry per round, in execution order.
    pub rounds: Vec<PerformanceMetrics>,
}

impl ExperimentResult {
    pub fn new(variant: StructureVariant, data_size: usize, operation: Operation) -> Self {
        Self {
            variant,
            data_size,
            operation,
            rounds: Vec::new(),
        }
    }

    pub fn push_round(&mut self, metrics: PerformanceMetrics) {
        self.rounds.push(metrics);
    }

    /// Mean across rounds.
    ///
    /// Float fields use the arithmetic mean. Integer fields (`iterations`,
    /// `tree_height`, `max_chain_length`) use truncating integer division so
    /// reported counts stay whole. An empty result means all zeroes.
    pub fn mean(&self) -> PerformanceMetrics {
        if self.rounds.is_empty() {
            return PerformanceMetrics::default();
        }
        let n = self.rounds.len();

        let mut mean = PerformanceMetrics::default();
        for round in &self.rounds {
            mean.execution_time += round.execution_time;
            mean.memory_usage_mb += round.memory_usage_mb;
            mean.load_factor += round.load_factor;
            mean.collision_rate += round.collision_rate;
            mean.avg_chain_length += round.avg_chain_length;
        }
        mean.execution_time /= n as f64;
        mean.memory_usage_mb /= n as f64;
        mean.load_factor /= n as f64;
        mean.collision_rate /= n as f64;
        mean.avg_chain_length /= n as f64;

        mean.iterations = self.rounds.iter().map(|r| r.iterations).sum::<u64>() / n as u64;
        mean.tree_height = self.rounds.iter().map(|r| r.tree_height).sum::<usize>() / n;
        mean.max_chain_length = self.rounds.iter().map(|r| r.max_chain_length).sum::<usize>() / n;
        mean
    }
}

/// Drives the experiment matrix and accumulates [`ExperimentResult`]s.
///
/// One insert and one search result per configuration cell, pushed in
/// execution order: LinearArray, BST, AVL, then the hash sweep, per dataset
/// size.
pub struct ExperimentRunner {
    config: ExperimentConfig,
    collector: MetricsCollector,
    rng: StdRng,
    results: Vec<ExperimentResult>,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            collector: MetricsCollector::new(),
            rng,
            results: Vec::new(),
        })
    }

    /// Run the full matrix.
    pub fn run(&mut self) -> Result<()> {
        let config = self.config.clone();
        for &size in &config.data_sizes {
            println!();
            println!("{}", "=".repeat(60));
            println!("Dataset size: {size} records");
            println!("{}", "=".repeat(60));

            let records = generate_records(size, config.seed);

            self.run_linear_array(&records);
            self.run_bst(&records);
            self.run_avl(&records);

            println!("  HashTable...");
            for &buckets in &config.bucket_counts {
                for &function in &config.hash_functions {
                    self.run_hash_table(&records, buckets, function)?;
                }
            }
        }
        Ok(())
    }

    /// Results accumulated so far, in execution order.
    pub fn results(&self) -> &[ExperimentResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<ExperimentResult> {
        self.results
    }

    fn run_linear_array(&mut self, records: &[Record]) {
        println!("  LinearArray...");
        let variant = StructureVariant::Linear;
        let mut insert_result = ExperimentResult::new(variant, records.len(), Operation::Insert);
        let mut search_result = ExperimentResult::new(variant, records.len(), Operation::Search);

        for _ in 0..self.config.rounds {
            let mut array = LinearArray::new();
            self.collector.start_measurement();
            let mut total = 0u64;
            for record in records {
                total += array.insert(record.clone());
            }
            insert_result.push_round(self.collector.stop_measurement(total));

            search_result.push_round(self.search_round(records, |key| array.search(key).1));
        }

        self.results.push(insert_result);
        self.results.push(search_result);
    }

    fn run_bst(&mut self, records: &[Record]) {
        println!("  BST...");
        let variant = StructureVariant::Tree { balanced: false };
        let mut insert_result = ExperimentResult::new(variant, records.len(), Operation::Insert);
        let mut search_result = ExperimentResult::new(variant, records.len(), Operation::Search);

        for _ in 0..self.config.rounds {
            let mut shuffled = records.to_vec();
            shuffled.shuffle(&mut self.rng);

            let mut tree = BinarySearchTree::new();
            self.collector.start_measurement();
            let mut total = 0u64;
            for record in shuffled {
                total += tree.insert(record);
            }
            let mut metrics = self.collector.stop_measurement(total);
            metrics.tree_height = tree.height();
            insert_result.push_round(metrics);

            search_result.push_round(self.search_round(records, |key| tree.search(key).1));
        }

        self.results.push(insert_result);
        self.results.push(search_result);
    }

    fn run_avl(&mut self, records: &[Record]) {
        println!("  AVL...");
        let variant = StructureVariant::Tree { balanced: true };
        let mut insert_result = ExperimentResult::new(variant, records.len(), Operation::Insert);
        let mut search_result = ExperimentResult::new(variant, records.len(), Operation::Search);

        for _ in 0..self.config.rounds {
            let mut shuffled = records.to_vec();
            shuffled.shuffle(&mut self.rng);

            let mut tree = AVLTree::new();
            self.collector.start_measurement();
            let mut total = 0u64;
            for record in shuffled {
                total += tree.insert(record);
            }
            let mut metrics = self.collector.stop_measurement(total);
            metrics.tree_height = tree.height();
            insert_result.push_round(metrics);

            search_result.push_round(self.search_round(records, |key| tree.search(key).1));
        }

        self.results.push(insert_result);
        self.results.push(search_result);
    }

    fn run_hash_table(
        &mut self,
        records: &[Record],
        buckets: usize,
        function: HashFunction,
    ) -> Result<()> {
        println!("    buckets={buckets}, function={}", function.name());
        let variant = StructureVariant::Hash { buckets, function };
        let mut insert_result = ExperimentResult::new(variant, records.len(), Operation::Insert);
        let mut search_result = ExperimentResult::new(variant, records.len(), Operation::Search);

        for _ in 0..self.config.rounds {
            let mut table = HashTable::new(buckets, function)?;
            self.collector.start_measurement();
            let mut total = 0u64;
            for record in records {
                total += table.insert(record.clone());
            }
            let mut metrics = self.collector.stop_measurement(total);
            let stats = table.stats();
            metrics.load_factor = stats.load_factor;
            metrics.collision_rate = stats.collision_rate;
            metrics.avg_chain_length = stats.avg_chain_length;
            metrics.max_chain_length = stats.max_chain_length;
            insert_result.push_round(metrics);

            search_result.push_round(self.search_round(records, |key| table.search(key).1));
        }

        self.results.push(insert_result);
        self.results.push(search_result);
        Ok(())
    }

    /// One timed search round: draw the sample first, then time the whole
    /// batch of lookups.
    ///
    /// The sample is drawn from the batch in generation order, before the
    /// timer starts, so sampling cost never pollutes the measurement. The
    /// reported iteration count is per lookup (total over the sample, integer
    /// division by sample size) while the time covers the whole batch.
    fn search_round<F>(&mut self, records: &[Record], mut lookup: F) -> PerformanceMetrics
    where
        F: FnMut(u32) -> u64,
    {
        let sample =
            sample_without_replacement(records, self.config.search_sample_cap, &mut self.rng);

        self.collector.start_measurement();
        let mut total = 0u64;
        for record in &sample {
            total += lookup(record.key);
        }
        let per_lookup = if sample.is_empty() {
            0
        } else {
            total / sample.len() as u64
        };
        self.collector.stop_measurement(per_lookup)
    }
}
