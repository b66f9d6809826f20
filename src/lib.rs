//! keybench: comparative benchmarks for classic keyed lookup structures.
//!
//! Measures insert and search workloads over batches of synthetic records
//! across four structure families:
//!
//! - [`LinearArray`]: append-only vector with front-to-back scan
//! - [`BinarySearchTree`]: unbalanced binary search tree
//! - [`AVLTree`]: height-balanced binary search tree
//! - [`HashTable`]: fixed-bucket chained table, three hash functions
//!
//! # Iteration counts
//!
//! Every insert and search reports an **iteration count**, a deterministic
//! work measure that stays comparable across structures where wall-clock
//! time is noisy:
//!
//! | Structure | Insert counts | Search counts |
//! |-----------|---------------|---------------|
//! | `LinearArray` | always 1 (append) | elements examined, match included |
//! | `BinarySearchTree` | nodes visited, terminal empty slot included | nodes visited |
//! | `AVLTree` | nodes visited, plus 1 per rotation performed | nodes visited |
//! | `HashTable` | 1 for the bucket access, plus chain entries scanned | 1 plus entries examined |
//!
//! # Determinism
//!
//! All randomness (record generation, per-round reshuffles, search samples)
//! flows from a single configured seed. A full run reproduces the same
//! datasets, tree shapes, collision patterns, and iteration counts every
//! time; only wall-clock times and memory readings vary between runs.
//!
//! # Memory readings
//!
//! The memory figure is the growth of the process's *peak* resident set
//! size across a measured section, not point-in-time usage. Peak RSS never
//! decreases, so later sections of a run often report zero growth: the
//! figure is a high-water-mark shift, not an allocation count.
//!
//! The [`benchmark`] module drives the full experiment matrix and
//! [`report`] renders the two CSV tables.

pub mod avl;
pub mod benchmark;
pub mod bst;
pub mod error;
pub mod hash;
pub mod linear;
pub mod record;
pub mod report;

pub use avl::AVLTree;
pub use bst::BinarySearchTree;
pub use error::{BenchError, Result};
pub use hash::{HashFunction, HashStats, HashTable};
pub use linear::LinearArray;
pub use record::Record;
