//! The Vitrine application shell: router, layout, and pages.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};
use vitrine_ui::{ErrorPanel, Navigation, provide_theme};

mod pages;

use pages::{BlogPage, GptsPage, HomePage, PostPage, ProjectPage, ProjectsPage};

/// Site author, appended to page titles.
pub(crate) const SITE_NAME: &str = "Oleksandr";

/// Document title for a loaded item.
pub(crate) fn page_title(title: &str) -> String {
    format!("{title} — {SITE_NAME}")
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
      <Title text=page_title("Product • Frontend • Energy/CCTV") />

      <Router>
        <Layout />
      </Router>
    }
}

/// Navigation aside plus the routed main column.
#[component]
fn Layout() -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! {
      <div class="site-layout">
        <aside class="site-aside">
          <Navigation current_path=current_path />
        </aside>

        <main class="site-main">
          <Routes fallback=NotFound>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=StaticSegment("blog") view=BlogPage />
            <Route path=StaticSegment("post") view=PostPage />
            <Route path=StaticSegment("projects") view=ProjectsPage />
            <Route path=StaticSegment("project") view=ProjectPage />
            <Route path=StaticSegment("gpts") view=GptsPage />
          </Routes>
        </main>
      </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <ErrorPanel
        title="Page not found"
        detail="This page does not exist."
        back_href="/"
        back_label="← Back home"
      />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_suffix() {
        assert_eq!(page_title("Grid Stories"), "Grid Stories — Oleksandr");
    }
}
