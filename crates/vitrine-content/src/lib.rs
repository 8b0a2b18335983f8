//! Vitrine Content Loader
//!
//! Fetches the site's static JSON content over HTTP and resolves items by
//! slug. One generic loader covers both access patterns the site uses:
//! per-slug documents (`posts/<slug>.json`) and collection documents
//! scanned for a matching slug (`projects/index.json`).
//!
//! Every failure is terminal for the current page view; there is no retry
//! or timeout logic.

pub mod loader;

pub use loader::{ContentError, ContentSource, Result, select_project};
