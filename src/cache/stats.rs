//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, rejected inserts and reaped entries.

use std::fmt;

// == Cache Stats ==
/// Counters describing cache activity since construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups that returned a value
    pub hits: u64,
    /// Number of lookups that found nothing (or only a stale entry under strict reads)
    pub misses: u64,
    /// Number of `add` calls rejected because the key was present
    pub rejected_adds: u64,
    /// Number of entries removed by the reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Counts a lookup that returned a value.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a lookup that returned nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Rejected Add ==
    /// Counts an `add` refused because the key was already cached.
    pub fn record_rejected_add(&mut self) {
        self.rejected_adds += 1;
    }

    // == Record Reaped ==
    /// Adds `count` entries removed by one sweep.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    // == Set Total Entries ==
    /// Overwrites the current entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses ({:.1}% hit rate), {} rejected adds, {} reaped, {} entries",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.rejected_adds,
            self.reaped,
            self.total_entries
        )
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.rejected_adds, 0);
        assert_eq!(stats.reaped, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_reaped_accumulates() {
        let mut stats = CacheStats::new();
        stats.record_reaped(3);
        stats.record_reaped(0);
        stats.record_reaped(2);
        assert_eq!(stats.reaped, 5);
    }

    #[test]
    fn test_display_summary() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        stats.record_miss();
        stats.record_reaped(2);
        stats.set_total_entries(4);
        assert_eq!(
            stats.to_string(),
            "1 hits, 3 misses (25.0% hit rate), 0 rejected adds, 2 reaped, 4 entries"
        );
    }

    #[test]
    fn test_record_rejected_add() {
        let mut stats = CacheStats::new();
        stats.record_rejected_add();
        assert_eq!(stats.rejected_adds, 1);
    }
}
