//! Filter-query formatting.
//!
//! The strings built here are what Solr receives as `fq` parameters, so the
//! format is fixed: `field:value` for one value, `field:a OR field:b ` (with
//! the trailing space) for several.

use std::fmt::Display;

use crate::search::SearchContext;
use crate::search::field;

/// `field:value`.
pub fn filter_query<V: Display + ?Sized>(field: &str, value: &V) -> String {
    format!("{field}:{value}")
}

/// OR-joins one `field:value` clause per value.
///
/// Returns `None` for an empty slice, which has no meaningful filter.
///
/// ```
/// use solr_suggest::search::filter_query_any;
///
/// assert_eq!(
///     filter_query_any("groupId", &[10180, 11681]).unwrap(),
///     "groupId:10180 OR groupId:11681 "
/// );
/// ```
pub fn filter_query_any<V: Display>(field: &str, values: &[V]) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    let clauses: Vec<String> = values
        .iter()
        .map(|value| filter_query(field, value))
        .collect();

    Some(format!("{} ", clauses.join(" OR ")))
}

/// Company, group, locale and type scoping for keyword-query suggestions.
pub fn filter_queries(search_context: &SearchContext) -> Vec<String> {
    let mut filter_queries = vec![filter_query(field::COMPANY_ID, &search_context.company_id)];

    if let Some(groups) = filter_query_any(field::GROUP_ID, &search_context.group_ids) {
        filter_queries.push(groups);
    }

    filter_queries.push(filter_query(field::LOCALE, search_context.locale.as_str()));
    filter_queries.push(filter_query(field::TYPE, field::SUGGESTION_TYPE));

    filter_queries
}
