//! Single-project page: `/project?project=<slug>`.
//!
//! Calculator entries divert to their standalone page instead of rendering.

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;
use vitrine_content::ContentSource;
use vitrine_core::{Project, trail_for};
use vitrine_ui::{Breadcrumbs, ErrorPanel, LoadingPanel, ProjectArticle};

use super::{FetchState, is_current_slug};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let query = use_query_map();
    let slug = Memo::new(move |_| query.read().get("project"));

    let state = RwSignal::new(FetchState::Loading);
    Effect::new(move |_| match slug.get() {
        None => state.set(FetchState::Missing),
        Some(requested) => {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let outcome = ContentSource::default().project(&requested).await;
                // A navigation while this fetch was in flight supersedes it.
                if !is_current_slug(&requested, slug.get_untracked().as_deref()) {
                    return;
                }
                match outcome {
                    Ok(project) => state.set(FetchState::Loaded(project)),
                    Err(_) => state.set(FetchState::Failed),
                }
            });
        }
    });

    view! {
      {move || match state.get() {
        FetchState::Loading => view! { <LoadingPanel message="Loading project…" /> }.into_any(),
        FetchState::Missing => {
          view! {
            <Breadcrumbs trail=trail_for("project", None) />
            <ErrorPanel
              title="Project not specified"
              detail="No project was requested."
              back_href="/projects"
              back_label="← Back to the projects"
            />
          }
            .into_any()
        }
        FetchState::Loaded(project) => {
          let calculator = project.calculator_redirect().map(str::to_string);
          if let Some(path) = calculator {
            redirect(&path);
            view! { <LoadingPanel message="Opening calculator…" /> }.into_any()
          } else {
            view! { <LoadedProject project=project /> }.into_any()
          }
        }
        FetchState::Failed => {
          view! {
            <Breadcrumbs trail=trail_for("project", None) />
            <ErrorPanel
              title="Project not found"
              detail="The project could not be found or failed to load."
              back_href="/projects"
              back_label="← Back to the projects"
            />
          }
            .into_any()
        }
      }}
    }
}

/// Client-side redirect to a standalone calculator page.
fn redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(path).is_err() {
        log::error!("failed to redirect to {path}");
    }
}

/// A successfully loaded project: breadcrumbs with the real title, meta
/// tags, and the article fragment.
#[component]
fn LoadedProject(project: Project) -> impl IntoView {
    let title = crate::page_title(&project.title);
    let description = project.meta_description().to_string();
    let image = project.thumbnail.clone();
    let trail = trail_for("project", Some(&project.title));

    view! {
      <Title text=title.clone() />
      <Meta name="description" content=description.clone() />
      <Meta property="og:title" content=title />
      <Meta property="og:description" content=description />
      {image
        .map(|src| {
          view! { <Meta property="og:image" content=src /> }
        })}

      <Breadcrumbs trail=trail />
      <ProjectArticle project=project />
    }
}
