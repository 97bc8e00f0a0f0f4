// ==========================================
// Lastmanagement Dashboard - Grouped Cumulative Aggregator
// ==========================================
// Per-day running totals: a prefix sum over a metric
// that resets at the start of each distinct day.
// ==========================================
// One generic component replaces the per-chart copies
// the source carried: the partition is built once per
// grouping and reused for any number of metrics.
// ==========================================

use std::collections::HashMap;
use std::hash::Hash;

// ==========================================
// Partition - grouping reused across metrics
// ==========================================

/// Partition of a record sequence by a grouping key (typically the
/// calendar day), preserving the caller-supplied relative order
/// inside each group.
///
/// Built in one linear pass; records need not be globally sorted,
/// only supplied in the order the caller wants the running totals
/// to follow (chronological, for meaningful per-day sums).
pub struct Partition<K> {
    /// Group key per group, in first-seen order.
    keys: Vec<K>,
    /// Original record indices per group, in input order.
    groups: Vec<Vec<usize>>,
    /// Total record count, for aligned output vectors.
    len: usize,
}

impl<K: Clone + Eq + Hash> Partition<K> {
    /// Partition `records` by `group_key_fn`.
    pub fn new<T>(records: &[T], group_key_fn: impl Fn(&T) -> K) -> Self {
        let mut keys: Vec<K> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut index_of: HashMap<K, usize> = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            let key = group_key_fn(record);
            let group = *index_of.entry(key.clone()).or_insert_with(|| {
                keys.push(key);
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(i);
        }

        Self {
            keys,
            groups,
            len: records.len(),
        }
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.keys.len()
    }

    /// Running total of one metric, aligned to the original record
    /// order.
    ///
    /// Within each group the output is the prefix sum of the metric;
    /// at each group start the sum resets to that group's first
    /// value. `None` metric values are excluded from the sum (not
    /// coerced to zero) and repeat the previous running value at
    /// their position.
    pub fn running_total<T>(
        &self,
        records: &[T],
        metric_fn: impl Fn(&T) -> Option<f64>,
    ) -> Vec<f64> {
        debug_assert_eq!(records.len(), self.len);
        let mut out = vec![0.0; self.len];

        for group in &self.groups {
            let mut running = 0.0;
            for &i in group {
                if let Some(value) = metric_fn(&records[i]) {
                    running += value;
                }
                out[i] = running;
            }
        }

        out
    }

    /// Final per-group totals, in first-seen group order. Feeds the
    /// annual projection's per-day total table.
    pub fn group_totals<T>(
        &self,
        records: &[T],
        metric_fn: impl Fn(&T) -> Option<f64>,
    ) -> Vec<(K, f64)> {
        debug_assert_eq!(records.len(), self.len);

        self.keys
            .iter()
            .zip(&self.groups)
            .map(|(key, group)| {
                let total = group
                    .iter()
                    .filter_map(|&i| metric_fn(&records[i]))
                    .sum::<f64>();
                (key.clone(), total)
            })
            .collect()
    }
}

/// One-shot convenience over [`Partition`]: per-record `(key,
/// running_total)` pairs in the original record order.
///
/// Callers that need several metrics over the same grouping should
/// build the partition once and call `running_total` per metric.
pub fn cumulative<T, K: Clone + Eq + Hash>(
    records: &[T],
    group_key_fn: impl Fn(&T) -> K,
    metric_fn: impl Fn(&T) -> Option<f64>,
) -> Vec<(K, f64)> {
    let partition = Partition::new(records, &group_key_fn);
    let totals = partition.running_total(records, metric_fn);

    records
        .iter()
        .zip(totals)
        .map(|(record, total)| (group_key_fn(record), total))
        .collect()
}
