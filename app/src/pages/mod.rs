//! Page components, one per route.

mod blog;
mod gpts;
mod home;
mod post;
mod project;
mod projects;

pub use blog::BlogPage;
pub use gpts::GptsPage;
pub use home::HomePage;
pub use post::PostPage;
pub use project::ProjectPage;
pub use projects::ProjectsPage;

/// Whether a resolved fetch still matches the slug the page currently
/// wants. Navigating while a fetch is in flight supersedes it; an
/// out-of-order response must not commit under the new slug's URL.
pub(crate) fn is_current_slug(requested: &str, current: Option<&str>) -> bool {
    current == Some(requested)
}

/// Lifecycle of a page's single fetch. Every failure is terminal for the
/// current page view.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FetchState<T> {
    /// Fetch outstanding; the page shows its loading panel.
    Loading,
    /// Required query parameter absent; no fetch was issued.
    Missing,
    /// Item loaded and ready to render.
    Loaded(T),
    /// Network, HTTP, parse, or not-found failure.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_response_does_not_commit() {
        // Navigated from "a" to "b" while "a" was still in flight.
        assert!(!is_current_slug("a", Some("b")));
        assert!(is_current_slug("b", Some("b")));
    }

    #[test]
    fn test_response_after_param_removed_does_not_commit() {
        assert!(!is_current_slug("a", None));
    }
}
