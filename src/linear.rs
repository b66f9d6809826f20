//! Append-only array with linear scan lookup.

use crate::record::Record;

/// The baseline structure: insertion appends, search walks front to back.
///
/// There is no duplicate check on insert and no removal; the array holds
/// whatever was appended, in insertion order.
#[derive(Debug, Default)]
pub struct LinearArray {
    records: Vec<Record>,
}

impl LinearArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally and returns an iteration count of 1: the
    /// cost model charges a single unit per append regardless of length.
    pub fn insert(&mut self, record: Record) -> u64 {
        self.records.push(record);
        1
    }

    /// Scans from the front. The count increments for every element
    /// examined, including the match itself, so a hit on the last element
    /// costs `len()` and a miss always costs `len()`.
    pub fn search(&self, key: u32) -> (Option<&Record>, u64) {
        let mut iterations = 0;
        for record in &self.records {
            iterations += 1;
            if record.key == key {
                return (Some(record), iterations);
            }
        }
        (None, iterations)
    }

    /// Number of appended records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
