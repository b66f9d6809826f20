//! Chained hash table with a fixed bucket count and selectable hash function.

use crate::error::{BenchError, Result};
use crate::record::Record;

/// Knuth's multiplicative constant, (sqrt(5) - 1) / 2.
const MULTIPLIER: f64 = 0.618_033_988_7;

/// The three hash functions under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFunction {
    /// `key mod bucket_count`.
    Division,
    /// `floor(bucket_count * fract(key * A))` with A = (sqrt(5) - 1) / 2.
    Multiplication,
    /// Sum of the key's decimal digits taken in chunks of three, reduced
    /// mod bucket count.
    Folding,
}

impl HashFunction {
    /// Select a function by name. Unrecognized names select `Division`;
    /// that fallback is a deliberate compatibility default, not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "division" => Self::Division,
            "multiplication" => Self::Multiplication,
            "folding" => Self::Folding,
            _ => Self::Division,
        }
    }

    /// Name as it appears in the result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Division => "division",
            Self::Multiplication => "multiplication",
            Self::Folding => "folding",
        }
    }
}

/// Occupancy statistics derived from the current table state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HashStats {
    /// Stored elements / bucket count.
    pub load_factor: f64,
    /// Collisions / stored elements; 0 for an empty table.
    pub collision_rate: f64,
    /// Stored elements / occupied buckets; 0 when nothing is stored.
    pub avg_chain_length: f64,
    /// Largest single-bucket occupancy.
    pub max_chain_length: usize,
}

/// Separate-chaining hash table.
///
/// The bucket count is fixed at construction; there is no resizing and no
/// rehashing, so chain lengths grow linearly with the load. That is the
/// point: the experiments sweep bucket counts against hash functions to
/// expose exactly how occupancy degrades.
#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Vec<Record>>,
    function: HashFunction,
    len: usize,
    collisions: u64,
}

impl HashTable {
    /// Create a table with `bucket_count` chains.
    pub fn new(bucket_count: usize, function: HashFunction) -> Result<Self> {
        if bucket_count == 0 {
            return Err(BenchError::InvalidConfig(
                "hash table needs at least one bucket".into(),
            ));
        }
        Ok(Self {
            buckets: vec![Vec::new(); bucket_count],
            function,
            len: 0,
            collisions: 0,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored records (duplicates are never stored twice).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts that landed on an already-occupied bucket, counted once per
    /// insert regardless of chain length.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Bucket index for a key under the configured function.
    pub fn bucket_index(&self, key: u32) -> usize {
        let buckets = self.buckets.len();
        match self.function {
            HashFunction::Division => key as usize % buckets,
            HashFunction::Multiplication => {
                let product = f64::from(key) * MULTIPLIER;
                (buckets as f64 * product.fract()) as usize
            }
            HashFunction::Folding => {
                let digits = key.to_string();
                let mut sum: u64 = 0;
                for chunk in digits.as_bytes().chunks(3) {
                    let mut piece: u64 = 0;
                    for digit in chunk {
                        piece = piece * 10 + u64::from(digit - b'0');
                    }
                    sum += piece;
                }
                sum as usize % buckets
            }
        }
    }

    /// Inserts a record, returning the probe count: 1 for the bucket
    /// access plus 1 per chain entry examined by the duplicate scan.
    ///
    /// The collision counter increments whenever the target bucket is
    /// non-empty before insertion, even when the scan then rejects the
    /// record as a duplicate.
    pub fn insert(&mut self, record: Record) -> u64 {
        let index = self.bucket_index(record.key);
        let mut iterations = 1;

        if !self.buckets[index].is_empty() {
            self.collisions += 1;
        }

        for existing in &self.buckets[index] {
            iterations += 1;
            if existing.key == record.key {
                return iterations;
            }
        }

        self.buckets[index].push(record);
        self.len += 1;
        iterations
    }

    /// Looks up a key in its bucket. The count starts at 1 for the bucket
    /// access and grows by 1 per chain entry examined.
    pub fn search(&self, key: u32) -> (Option<&Record>, u64) {
        let index = self.bucket_index(key);
        let mut iterations = 1;
        for record in &self.buckets[index] {
            iterations += 1;
            if record.key == key {
                return (Some(record), iterations);
            }
        }
        (None, iterations)
    }

    /// Snapshot of the occupancy statistics.
    pub fn stats(&self) -> HashStats {
        let occupied = self.buckets.iter().filter(|bucket| !bucket.is_empty()).count();
        let max_chain_length = self
            .buckets
            .iter()
            .map(|bucket| bucket.len())
            .max()
            .unwrap_or(0);

        HashStats {
            load_factor: self.len as f64 / self.buckets.len() as f64,
            collision_rate: if self.len == 0 {
                0.0
            } else {
                self.collisions as f64 / self.len as f64
            },
            avg_chain_length: if occupied == 0 {
                0.0
            } else {
                self.len as f64 / occupied as f64
            },
            max_chain_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: u32) -> Record {
        Record::new(key, format!("r{key}"), 3000.0, 5)
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert!(HashTable::new(0, HashFunction::Division).is_err());
    }

    #[test]
    fn test_from_name_known_and_fallback() {
        assert_eq!(HashFunction::from_name("division"), HashFunction::Division);
        assert_eq!(
            HashFunction::from_name("multiplication"),
            HashFunction::Multiplication
        );
        assert_eq!(HashFunction::from_name("folding"), HashFunction::Folding);
        // Compatibility default.
        assert_eq!(HashFunction::from_name("fibonacci"), HashFunction::Division);
        assert_eq!(HashFunction::from_name(""), HashFunction::Division);
    }

    #[test]
    fn test_division_index() {
        let table = HashTable::new(100, HashFunction::Division).expect("valid table");
        assert_eq!(table.bucket_index(100), 0);
        assert_eq!(table.bucket_index(123), 23);
        assert_eq!(table.bucket_index(999_999_999), 99);
    }

    #[test]
    fn test_multiplication_index_matches_formula() {
        let table = HashTable::new(1000, HashFunction::Multiplication).expect("valid table");
        for key in [1u32, 42, 123_456_789, 999_999_999] {
            let expected = (1000.0 * (f64::from(key) * MULTIPLIER).fract()) as usize;
            assert_eq!(table.bucket_index(key), expected);
            assert!(table.bucket_index(key) < 1000);
        }
    }

    #[test]
    fn test_folding_index_sums_digit_chunks() {
        let table = HashTable::new(10_000, HashFunction::Folding).expect("valid table");
        // 123 + 456 + 789 = 1368
        assert_eq!(table.bucket_index(123_456_789), 1368);
        // Fewer than three digits left: the trailing chunk is shorter.
        assert_eq!(table.bucket_index(123), 123);
        assert_eq!(table.bucket_index(1234), 123 + 4);
    }

    #[test]
    fn test_insert_counts_bucket_access_and_scan() {
        let mut table = HashTable::new(10, HashFunction::Division).expect("valid table");
        // Empty bucket: access only.
        assert_eq!(table.insert(record(3)), 1);
        // Same bucket: access + one existing entry scanned.
        assert_eq!(table.insert(record(13)), 2);
        assert_eq!(table.insert(record(23)), 3);
        assert_eq!(table.len(), 3);
        assert_eq!(table.collisions(), 2);
    }

    #[test]
    fn test_duplicate_rejected_but_collision_counted() {
        let mut table = HashTable::new(10, HashFunction::Division).expect("valid table");
        table.insert(record(3));
        table.insert(record(13));

        let before = table.collisions();
        // Scan stops at the duplicate: access + first entry.
        assert_eq!(table.insert(record(3)), 2);
        assert_eq!(table.len(), 2);
        // The occupied-bucket collision still counted.
        assert_eq!(table.collisions(), before + 1);
    }

    #[test]
    fn test_search_counts_chain_entries() {
        let mut table = HashTable::new(10, HashFunction::Division).expect("valid table");
        for key in [3, 13, 23] {
            table.insert(record(key));
        }

        let (found, iterations) = table.search(3);
        assert_eq!(found.map(|r| r.key), Some(3));
        assert_eq!(iterations, 2);

        let (found, iterations) = table.search(23);
        assert_eq!(found.map(|r| r.key), Some(23));
        assert_eq!(iterations, 4);

        // Miss exhausts the chain.
        let (found, iterations) = table.search(33);
        assert!(found.is_none());
        assert_eq!(iterations, 4);

        // Miss on an empty bucket costs the access alone.
        let (found, iterations) = table.search(5);
        assert!(found.is_none());
        assert_eq!(iterations, 1);
    }

    #[test]
    fn test_stats_on_empty_table() {
        let table = HashTable::new(10, HashFunction::Division).expect("valid table");
        assert_eq!(table.stats(), HashStats::default());
    }

    #[test]
    fn test_stats_derivation() {
        let mut table = HashTable::new(4, HashFunction::Division).expect("valid table");
        // Buckets: 0 -> {4, 8}, 1 -> {1}, rest empty.
        for key in [4, 8, 1] {
            table.insert(record(key));
        }

        let stats = table.stats();
        assert!((stats.load_factor - 0.75).abs() < 1e-12);
        // One collision (8 landed on occupied bucket 0) over three elements.
        assert!((stats.collision_rate - 1.0 / 3.0).abs() < 1e-12);
        // Three elements over two occupied buckets.
        assert!((stats.avg_chain_length - 1.5).abs() < 1e-12);
        assert_eq!(stats.max_chain_length, 2);
    }
}
