//! Vitrine Core Library
//!
//! Platform-independent building blocks for the Vitrine portfolio frontend:
//! content item types, text utilities, search/filter helpers, and the
//! breadcrumb trail mapping. Nothing in this crate touches the browser, so
//! everything here is testable natively.

pub mod breadcrumbs;
pub mod content;
pub mod search;
pub mod text;

pub use breadcrumbs::{Crumb, page_segment, trail_for};
pub use content::{Post, PostSummary, Project, Slugged, locate_by_slug};
pub use search::{
    DEFAULT_SEARCH_FIELDS, FieldValue, Searchable, Tagged, all_tags, filter_by_tag, search_items,
};
pub use text::{
    DateLocale, escape_html, format_date, read_time, read_time_with_rate, slugify, truncate,
};
