//! The synthetic record type shared by every structure under test.

use std::cmp::Ordering;

/// A fixed-shape synthetic record.
///
/// Identity, equality, and ordering are defined by `key` alone; the other
/// fields are payload carried along to keep per-element sizes realistic.
#[derive(Debug, Clone)]
pub struct Record {
    /// Unique nine-digit identifier.
    pub key: u32,
    /// Opaque text payload.
    pub label: String,
    /// Numeric payload in [2000.0, 20000.0).
    pub amount: f64,
    /// Category code in [1, 100].
    pub category: u32,
}

impl Record {
    pub fn new(key: u32, label: impl Into<String>, amount: f64, category: u32) -> Self {
        Self {
            key,
            label: label.into(),
            amount,
            category,
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
