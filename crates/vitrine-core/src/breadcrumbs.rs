//! Breadcrumb trail mapping.
//!
//! Pure functions from the current page segment to a small trail of crumbs;
//! rendering lives in `vitrine-ui`. Unrecognized pages get an empty trail.

/// One breadcrumb: a linked ancestor or the unlinked current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Display label.
    pub label: String,

    /// Link target; `None` marks the current page.
    pub href: Option<String>,
}

impl Crumb {
    /// A linked crumb.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// The unlinked current-page crumb.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// The home crumb that starts every trail.
    pub fn home() -> Self {
        Self::link("🏠", "/")
    }
}

/// Final segment of a path, normalized for the trail mapping.
///
/// Trims a trailing slash and a `.html` suffix so both route-style paths
/// (`/post`) and file-style paths (`/post.html`) map the same way. An empty
/// path is the index page.
pub fn page_segment(path: &str) -> String {
    let tail = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let tail = tail.strip_suffix(".html").unwrap_or(tail);
    if tail.is_empty() {
        "index".to_string()
    } else {
        tail.to_string()
    }
}

/// Breadcrumb trail for a page segment.
///
/// `current_label` overrides the current-page label on detail pages (the
/// loaded item's title); listing pages use their fixed labels.
pub fn trail_for(segment: &str, current_label: Option<&str>) -> Vec<Crumb> {
    let custom = |fallback: &str| current_label.unwrap_or(fallback).to_string();

    match segment {
        "projects" => vec![Crumb::home(), Crumb::current("💡 Interactive Lab")],
        "project" => vec![
            Crumb::home(),
            Crumb::link("💡 Interactive Lab", "/projects"),
            Crumb::current(custom("Project")),
        ],
        "gpts" => vec![Crumb::home(), Crumb::current("GPTs Lab")],
        "gpt" => vec![
            Crumb::home(),
            Crumb::link("GPTs Lab", "/gpts"),
            Crumb::current(custom("GPT")),
        ],
        "blog" => vec![Crumb::home(), Crumb::current("Blog")],
        "post" => vec![
            Crumb::home(),
            Crumb::link("Blog", "/blog"),
            Crumb::current(custom("Article")),
        ],
        _ => Vec::new(),
    }
}
