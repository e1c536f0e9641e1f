//! Cache metrics.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! host process installs a recorder.

use metrics::{counter, describe_counter};

/// Metric names for the cache layer.
pub mod names {
    /// Reads that found a value.
    pub const CACHE_HITS_TOTAL: &str = "quill_cache_hits_total";
    /// Reads that found nothing.
    pub const CACHE_MISSES_TOTAL: &str = "quill_cache_misses_total";
    /// Successful writes.
    pub const CACHE_WRITES_TOTAL: &str = "quill_cache_writes_total";
    /// Delete calls, whether or not the key existed.
    pub const CACHE_DELETES_TOTAL: &str = "quill_cache_deletes_total";
    /// Store failures.
    pub const CACHE_ERRORS_TOTAL: &str = "quill_cache_errors_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache reads that found a value");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Total number of cache reads that found nothing");
    describe_counter!(names::CACHE_WRITES_TOTAL, "Total number of cache writes");
    describe_counter!(names::CACHE_DELETES_TOTAL, "Total number of cache deletes");
    describe_counter!(names::CACHE_ERRORS_TOTAL, "Total number of cache store failures");
}

/// Record a read outcome.
pub fn record_lookup(backend: &'static str, hit: bool) {
    let name = if hit {
        names::CACHE_HITS_TOTAL
    } else {
        names::CACHE_MISSES_TOTAL
    };
    counter!(name, "backend" => backend).increment(1);
}

/// Record a successful write.
pub fn record_write(backend: &'static str) {
    counter!(names::CACHE_WRITES_TOTAL, "backend" => backend).increment(1);
}

/// Record a delete.
pub fn record_delete(backend: &'static str) {
    counter!(names::CACHE_DELETES_TOTAL, "backend" => backend).increment(1);
}

/// Record a store failure for `operation`.
pub fn record_error(backend: &'static str, operation: &'static str) {
    counter!(names::CACHE_ERRORS_TOTAL, "backend" => backend, "operation" => operation)
        .increment(1);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ::metrics::{SharedString, Unit};
    use metrics_util::debugging::DebugValue;
    use metrics_util::{CompositeKey, MetricKind};

    /// One row of a `DebuggingRecorder` snapshot.
    pub(crate) type Recorded = (CompositeKey, Option<Unit>, Option<SharedString>, DebugValue);

    /// Value of the counter `name` carrying exactly `labels`, if recorded.
    pub(crate) fn counter_value(
        recorded: &[Recorded],
        name: &str,
        labels: &[(&str, &str)],
    ) -> Option<u64> {
        let mut wanted = labels.to_vec();
        wanted.sort_unstable();

        recorded.iter().find_map(|(key, _, _, value)| {
            if key.kind() != MetricKind::Counter || key.key().name() != name {
                return None;
            }
            let mut found: Vec<(&str, &str)> =
                key.key().labels().map(|l| (l.key(), l.value())).collect();
            found.sort_unstable();
            match value {
                DebugValue::Counter(count) if found == wanted => Some(*count),
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::counter_value;
    use super::*;
    use metrics_util::debugging::DebuggingRecorder;

    #[test]
    fn test_counters_carry_backend_and_operation_labels() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            register_metrics();
            record_lookup("memory", true);
            record_lookup("memory", true);
            record_lookup("memory", false);
            record_write("memory");
            record_delete("redis");
            record_error("redis", "get");
        });

        let snapshot = snapshotter.snapshot().into_vec();
        let memory = [("backend", "memory")];
        assert_eq!(counter_value(&snapshot, names::CACHE_HITS_TOTAL, &memory), Some(2));
        assert_eq!(counter_value(&snapshot, names::CACHE_MISSES_TOTAL, &memory), Some(1));
        assert_eq!(counter_value(&snapshot, names::CACHE_WRITES_TOTAL, &memory), Some(1));
        assert_eq!(
            counter_value(&snapshot, names::CACHE_DELETES_TOTAL, &[("backend", "redis")]),
            Some(1)
        );
        assert_eq!(
            counter_value(
                &snapshot,
                names::CACHE_ERRORS_TOTAL,
                &[("backend", "redis"), ("operation", "get")]
            ),
            Some(1)
        );
        assert_eq!(
            counter_value(&snapshot, names::CACHE_ERRORS_TOTAL, &[("backend", "redis")]),
            None
        );
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_lookup("memory", true);
        record_error("redis", "get");
    }
}
