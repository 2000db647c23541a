use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::core::dataset::ProductRecord;

/// Effective top-N when the control input is missing or unparseable.
pub const DEFAULT_TOP_N: usize = 30;
/// Smallest top-N a caller may request.
pub const MIN_TOP_N: usize = 1;

/// Returns the `top_n` highest-value records, sorted descending by value.
///
/// The sort is stable: records with equal value keep their input order.
/// Fewer than `top_n` records yields all of them; empty input yields an
/// empty ranking.
#[must_use]
pub fn rank_top_n(records: &[ProductRecord], top_n: usize) -> Vec<ProductRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|record| Reverse(OrderedFloat(record.value_kusd)));
    ranked.truncate(top_n);
    ranked
}

/// Resolves a raw top-N control value.
///
/// Unparseable or missing input falls back to [`DEFAULT_TOP_N`]; parsed
/// values are clamped to [`MIN_TOP_N`].
#[must_use]
pub fn resolve_top_n(raw: Option<&str>) -> usize {
    let Some(parsed) = raw.and_then(|text| text.trim().parse::<f64>().ok()) else {
        return DEFAULT_TOP_N;
    };
    if !parsed.is_finite() {
        return DEFAULT_TOP_N;
    }
    (parsed.floor() as i64).max(MIN_TOP_N as i64) as usize
}

/// Largest value in a record set, or 0 for an empty set.
#[must_use]
pub fn max_value_kusd(records: &[ProductRecord]) -> f64 {
    records
        .iter()
        .map(|record| OrderedFloat(record.value_kusd))
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}
