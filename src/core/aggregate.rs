//! Grouping of join rows into nested views
//!
//! Left-outer joins return one row per (parent, child) pair. The views the API
//! exposes nest the children under their parent, so rows are folded into a
//! keyed accumulator and exported in the order each parent was first seen.

use indexmap::IndexMap;
use std::hash::Hash;

/// Group `rows` by `key`, folding each row into its group's accumulator
///
/// `init` builds the accumulator from the first row of a group; `fold` is then
/// called for every row of the group, including that first one.
///
/// # Example
///
/// ```
/// use biztime::core::aggregate::group_ordered;
///
/// let rows = vec![("tech", Some("apple")), ("retail", None), ("tech", Some("ibm"))];
/// let grouped = group_ordered(
///     rows,
///     |(industry, _)| *industry,
///     |(industry, _)| (industry.to_string(), Vec::new()),
///     |(_, companies), (_, company)| companies.extend(company.map(str::to_string)),
/// );
///
/// assert_eq!(grouped[0], ("tech".to_string(), vec!["apple".to_string(), "ibm".to_string()]));
/// assert_eq!(grouped[1], ("retail".to_string(), vec![]));
/// ```
pub fn group_ordered<R, K, A>(
    rows: impl IntoIterator<Item = R>,
    key: impl Fn(&R) -> K,
    init: impl Fn(&R) -> A,
    mut fold: impl FnMut(&mut A, R),
) -> Vec<A>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, A> = IndexMap::new();

    for row in rows {
        let acc = groups.entry(key(&row)).or_insert_with(|| init(&row));
        fold(acc, row);
    }

    groups.into_values().collect()
}
