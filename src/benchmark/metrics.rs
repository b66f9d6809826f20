//! Timing and memory measurement for benchmark rounds.
//!
//! A round is bracketed by [`MetricsCollector::start_measurement`] and
//! [`MetricsCollector::stop_measurement`]. The collector captures:
//! - Wall-clock time for the bracketed section
//! - Growth in peak resident set size across the section
//!
//! Iteration counts are produced by the structures themselves and handed to
//! the collector at stop time, so one metrics record carries everything a
//! report row needs.

use std::time::Instant;

/// Measurements for a single benchmark round.
///
/// Fields that do not apply to a given structure stay at their `Default`
/// values: `tree_height` is only set for tree rounds, the chain fields only
/// for hash table rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceMetrics {
    /// Wall-clock duration of the measured section, in seconds.
    pub execution_time: f64,
    /// Growth in peak resident set size during the section, in MiB.
    pub memory_usage_mb: f64,
    /// Total work units reported by the structure for the section.
    pub iterations: u64,
    /// Height of the tree after the section, if the structure is a tree.
    pub tree_height: usize,
    /// Occupancy of the hash table, if the structure is a hash table.
    pub load_factor: f64,
    /// Colliding inserts over total inserts, if the structure is a hash table.
    pub collision_rate: f64,
    /// Mean occupied-bucket chain length, if the structure is a hash table.
    pub avg_chain_length: f64,
    /// Longest bucket chain, if the structure is a hash table.
    pub max_chain_length: usize,
}

/// Snapshot taken when a measurement opens.
#[derive(Debug, Clone, Copy)]
struct MeasurementStart {
    at: Instant,
    peak_rss_mb: f64,
}

/// Brackets benchmark sections and turns them into [`PerformanceMetrics`].
#[derive(Debug, Default)]
pub struct MetricsCollector {
    measuring: Option<MeasurementStart>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a measured section, recording the clock and the current peak RSS.
    pub fn start_measurement(&mut self) {
        self.measuring = Some(MeasurementStart {
            at: Instant::now(),
            peak_rss_mb: peak_rss_mb().unwrap_or(0.0),
        });
    }

    /// Close the current section and fold in the structure's iteration count.
    ///
    /// Peak RSS is monotone within a process, so the memory figure is the
    /// growth of the high-water mark across the section: zero when the
    /// section did not push the process to a new peak. Without a matching
    /// `start_measurement` the timing and memory fields stay zeroed.
    pub fn stop_measurement(&mut self, iterations: u64) -> PerformanceMetrics {
        let Some(start) = self.measuring.take() else {
            return PerformanceMetrics {
                iterations,
                ..PerformanceMetrics::default()
            };
        };

        let peak_now = peak_rss_mb().unwrap_or(start.peak_rss_mb);
        PerformanceMetrics {
            execution_time: start.at.elapsed().as_secs_f64(),
            memory_usage_mb: (peak_now - start.peak_rss_mb).max(0.0),
            iterations,
            ..PerformanceMetrics::default()
        }
    }
}

/// Peak resident set size of this process, in MiB.
///
/// Linux reports `ru_maxrss` in kilobytes, macOS in bytes.
#[cfg(unix)]
fn peak_rss_mb() -> Option<f64> {
    use std::mem::MaybeUninit;

    let mut usage = MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage fills the struct for the calling process; a non-zero
    // return leaves it untouched and we bail before reading it.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    let usage = unsafe { usage.assume_init() };

    let divisor = if cfg!(target_os = "macos") {
        1024.0 * 1024.0
    } else {
        1024.0
    };
    Some(usage.ru_maxrss as f64 / divisor)
}

#[cfg(not(unix))]
fn peak_rss_mb() -> Option<f64> {
    None
}
