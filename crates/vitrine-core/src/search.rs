//! Search and tag-filter helpers over content collections.
//!
//! Items expose their searchable fields through [`Searchable`] so the same
//! matching logic serves posts and projects; the caller picks the field set.

use std::collections::BTreeSet;

/// Field set the listing pages search by default.
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &["title", "description", "tags"];

/// A searchable field value: plain text or a list searched element-wise.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Single text value.
    Text(&'a str),
    /// List value; a match in any element counts.
    Many(&'a [String]),
}

/// Items that expose named fields for substring search.
pub trait Searchable {
    /// Look up a field by name; `None` when the item has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Items that carry a tag list.
pub trait Tagged {
    /// The item's tags, in authored order.
    fn tags(&self) -> &[String];
}

/// Case-insensitive substring search across the given fields.
///
/// A blank query returns every item.
pub fn search_items<'a, T: Searchable>(items: &'a [T], query: &str, fields: &[&str]) -> Vec<&'a T> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            fields.iter().any(|field| match item.field(field) {
                Some(FieldValue::Text(value)) => value.to_lowercase().contains(&term),
                Some(FieldValue::Many(values)) => {
                    values.iter().any(|value| value.to_lowercase().contains(&term))
                }
                None => false,
            })
        })
        .collect()
}

/// Exact case-insensitive tag filter.
///
/// An empty tag or the literal `all` returns every item.
pub fn filter_by_tag<'a, T: Tagged>(items: &'a [T], tag: &str) -> Vec<&'a T> {
    if tag.is_empty() || tag == "all" {
        return items.iter().collect();
    }

    let wanted = tag.to_lowercase();
    items
        .iter()
        .filter(|item| item.tags().iter().any(|t| t.to_lowercase() == wanted))
        .collect()
}

/// Every distinct tag across the items, lexicographically sorted.
pub fn all_tags<T: Tagged>(items: &[T]) -> Vec<String> {
    let set: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.tags().iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Project;

    fn sample() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {
                    "slug": "solar",
                    "title": "Solar Dashboard",
                    "description": "Monitoring for rooftop panels",
                    "tags": ["Energy", "Dashboards"]
                },
                {
                    "slug": "cctv",
                    "title": "CCTV Planner",
                    "description": "Camera coverage planning",
                    "tags": ["CCTV", "AI"]
                },
                {
                    "slug": "notes",
                    "title": "Field Notes",
                    "tags": ["b", "a", "b"]
                }
            ]"#,
        )
        .expect("fixture parses")
    }

    #[test]
    fn test_search_blank_query_returns_all() {
        let items = sample();
        assert_eq!(search_items(&items, "", DEFAULT_SEARCH_FIELDS).len(), 3);
        assert_eq!(search_items(&items, "   ", DEFAULT_SEARCH_FIELDS).len(), 3);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let items = sample();
        let hits = search_items(&items, "SOLAR", DEFAULT_SEARCH_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "solar");
    }

    #[test]
    fn test_search_matches_array_fields_elementwise() {
        let items = sample();
        let hits = search_items(&items, "ener", DEFAULT_SEARCH_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "solar");
    }

    #[test]
    fn test_search_respects_field_set() {
        let items = sample();
        // Tags excluded: "energy" only appears in tags.
        let hits = search_items(&items, "energy", &["title", "description"]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_skips_missing_fields() {
        let items = sample();
        // "notes" has no description; must not match, must not panic.
        let hits = search_items(&items, "coverage", DEFAULT_SEARCH_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "cctv");
    }

    #[test]
    fn test_filter_by_tag_case_insensitive_exact() {
        let items = sample();
        let upper = filter_by_tag(&items, "AI");
        let lower = filter_by_tag(&items, "ai");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].slug, lower[0].slug);
        // Exact match only: "A" matches the tag "a", never "AI".
        let single = filter_by_tag(&items, "A");
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].slug, "notes");
    }

    #[test]
    fn test_filter_by_tag_all_sentinel() {
        let items = sample();
        assert_eq!(filter_by_tag(&items, "all").len(), 3);
        assert_eq!(filter_by_tag(&items, "").len(), 3);
    }

    #[test]
    fn test_all_tags_dedup_sorted() {
        let items = sample();
        assert_eq!(
            all_tags(&items),
            vec!["AI", "CCTV", "Dashboards", "Energy", "a", "b"]
        );
    }
}
