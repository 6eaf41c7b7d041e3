//! Group-by aggregation, top-N selection and the percentage transform.
//!
//! All aggregations emit group rows in first-occurrence order of the key.
//! Combined with Rust's stable sorts, that gives every downstream ordering
//! the "ties break by natural row order" behavior with no secondary key.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// One output row of a group-by-aggregate step: the group key, the mean
/// of the measure, and the support count (number of underlying rows).
#[derive(Debug, Clone, Serialize)]
pub struct GroupStats<K> {
    pub key: K,
    pub mean: f64,
    pub count: u64,
}

/// Count rows per distinct key.
///
/// Keys are emitted in first-seen order.
pub fn count_by<R, K, F>(rows: impl IntoIterator<Item = R>, key_fn: F) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&R) -> K,
{
    let mut groups: Vec<(K, u64)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for row in rows {
        let key = key_fn(&row);
        match positions.get(&key) {
            Some(&idx) => groups[idx].1 += 1,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, 1));
            }
        }
    }
    groups
}

/// Mean of a numeric measure per distinct key, with support counts.
///
/// Keys are emitted in first-seen order. The mean is computed over exactly
/// the rows sharing the key.
pub fn mean_by<R, K, KF, MF>(
    rows: impl IntoIterator<Item = R>,
    key_fn: KF,
    measure_fn: MF,
) -> Vec<GroupStats<K>>
where
    K: Eq + Hash + Clone,
    KF: Fn(&R) -> K,
    MF: Fn(&R) -> f64,
{
    let mut sums: Vec<(K, f64, u64)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for row in rows {
        let key = key_fn(&row);
        let measure = measure_fn(&row);
        match positions.get(&key) {
            Some(&idx) => {
                sums[idx].1 += measure;
                sums[idx].2 += 1;
            }
            None => {
                positions.insert(key.clone(), sums.len());
                sums.push((key, measure, 1));
            }
        }
    }

    sums.into_iter()
        .map(|(key, sum, count)| GroupStats {
            key,
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Top-N selection for "best rated" style views.
///
/// Drops groups below the minimum support count, stable-sorts descending
/// by mean (ties keep first-seen order) and truncates to `limit`. Fewer
/// than `limit` qualifying groups returns all of them.
pub fn top_by_mean<K>(
    mut stats: Vec<GroupStats<K>>,
    min_count: u64,
    limit: usize,
) -> Vec<GroupStats<K>> {
    stats.retain(|group| group.count >= min_count);
    stats.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    stats.truncate(limit);
    stats
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Attach each row's share of the table total as a percentage, rounded to
/// two decimals.
///
/// The total is the *filtered* table's sum, not the full dataset's. The
/// input must be non-empty; callers branch on emptiness before invoking
/// the transform (an all-zero table cannot occur since every group has at
/// least one supporting row).
pub fn with_percentages<K: Clone>(counts: &[(K, u64)]) -> Vec<(K, u64, f64)> {
    debug_assert!(!counts.is_empty(), "percentage transform on empty table");
    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    counts
        .iter()
        .map(|(key, count)| {
            (
                key.clone(),
                *count,
                round2(*count as f64 / total as f64 * 100.0),
            )
        })
        .collect()
}
