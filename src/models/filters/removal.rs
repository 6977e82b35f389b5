//! Rewrites the page URL when a filter tag is removed.
//!
//! The query string is the only carrier of filter state: repeated
//! `key=value` pairs, one per selected value, in the order the form
//! submitted them. Every rewrite here keeps that contract.

use url::Url;

use super::{ActiveFilter, END_DATE_PARAM, START_DATE_PARAM, values_of};

/// Compute the navigation target after removing one filter selection.
///
/// The input URL is never mutated. Removing a value or key that is not
/// present returns the URL unchanged. Scheme, host, path and fragment
/// always pass through as-is.
pub fn remove_filter(current: &Url, filter: &ActiveFilter) -> Url {
    let pairs: Vec<(String, String)> = current.query_pairs().into_owned().collect();

    let next_pairs = match filter {
        ActiveFilter::DateRange => {
            let kept: Vec<(String, String)> = pairs
                .iter()
                .filter(|(k, _)| k != START_DATE_PARAM && k != END_DATE_PARAM)
                .cloned()
                .collect();
            if kept.len() == pairs.len() {
                return current.clone();
            }
            kept
        }
        ActiveFilter::Facet { name, value } => {
            let mut values = values_of(&pairs, name);
            let Some(index) = values.iter().position(|v| v == value) else {
                return current.clone();
            };
            values.remove(index);
            // Drop every occurrence of the key, then re-append the
            // remaining values one pair at a time. The rewrite is what
            // guarantees repeated-key serialization instead of a single
            // comma-joined value.
            let mut kept: Vec<(String, String)> =
                pairs.iter().filter(|(k, _)| k != name).cloned().collect();
            kept.extend(values.into_iter().map(|v| (name.clone(), v)));
            kept
        }
    };

    rebuild_query(current, &next_pairs)
}

/// Replace every occurrence of `name` with a single trailing
/// `name=value` pair, leaving the other pairs untouched. Used for the
/// sort and pagination links.
pub fn replace_param(current: &Url, name: &str, value: &str) -> Url {
    let pairs: Vec<(String, String)> = current.query_pairs().into_owned().collect();
    let mut kept: Vec<(String, String)> =
        pairs.iter().filter(|(k, _)| k != name).cloned().collect();
    kept.push((name.to_string(), value.to_string()));
    rebuild_query(current, &kept)
}

/// Same-origin href for a rewritten URL: path plus query string, the
/// form the rendered links embed.
pub fn local_href(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn rebuild_query(current: &Url, pairs: &[(String, String)]) -> Url {
    let mut next = current.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}
