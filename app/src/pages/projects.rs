//! Projects listing page: `/projects`, with debounced search and an exact
//! tag filter.

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use vitrine_content::ContentSource;
use vitrine_core::{
    DEFAULT_SEARCH_FIELDS, DateLocale, Project, all_tags, filter_by_tag, format_date,
    search_items, trail_for, truncate,
};
use vitrine_ui::{Breadcrumbs, Debounce, ErrorPanel, LoadingPanel, TagChips};

use super::FetchState;

const SEARCH_DEBOUNCE_MS: i32 = 250;
const CARD_DESCRIPTION_CHARS: usize = 120;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = RwSignal::new(FetchState::Loading);
    Effect::new(move |_| {
        spawn_local(async move {
            match ContentSource::default().projects().await {
                Ok(projects) => state.set(FetchState::Loaded(projects)),
                Err(_) => state.set(FetchState::Failed),
            }
        });
    });

    let query = RwSignal::new(String::new());
    let active_tag = RwSignal::new(String::from("all"));
    let debounce = StoredValue::new_local(Debounce::new(SEARCH_DEBOUNCE_MS));

    let visible = move |projects: &[Project]| -> Vec<Project> {
        let tag = active_tag.get();
        let tagged: Vec<Project> = filter_by_tag(projects, &tag).into_iter().cloned().collect();
        search_items(&tagged, &query.get(), DEFAULT_SEARCH_FIELDS)
            .into_iter()
            .cloned()
            .collect()
    };

    view! {
      <Title text=crate::page_title("Interactive Lab") />
      <Breadcrumbs trail=trail_for("projects", None) />

      <section class="page-header">
        <h1>"Interactive Lab"</h1>
        <input
          type="search"
          class="search-input"
          placeholder="Search projects…"
          aria-label="Search projects"
          on:input=move |ev| {
            let value = event_target_value(&ev);
            debounce.with_value(|debounce| debounce.call(move || query.set(value)));
          }
        />
      </section>

      {move || match state.get() {
        FetchState::Loaded(projects) => {
          let tags = all_tags(&projects);
          view! {
            <div class="tag-filter">
              <TagButton tag="all".to_string() label="All".to_string() active_tag=active_tag />
              <For
                each=move || tags.clone()
                key=|tag| tag.clone()
                children=move |tag| {
                  view! { <TagButton tag=tag.clone() label=tag active_tag=active_tag /> }
                }
              />
            </div>
            <div class="project-grid">
              <For
                each=move || visible(&projects)
                key=|project| project.slug.clone()
                children=move |project| view! { <ProjectCard project=project /> }
              />
            </div>
          }
            .into_any()
        }
        FetchState::Failed => {
          view! {
            <ErrorPanel
              title="Projects unavailable"
              detail="The projects could not be loaded."
              back_href="/"
              back_label="← Back home"
            />
          }
            .into_any()
        }
        _ => view! { <LoadingPanel message="Loading projects…" /> }.into_any(),
      }}
    }
}

#[component]
fn TagButton(tag: String, label: String, active_tag: RwSignal<String>) -> impl IntoView {
    let selected = tag.clone();
    let this = tag.clone();

    view! {
      <button
        class="btn tag-btn"
        class:active=move || active_tag.get() == this
        on:click=move |_| active_tag.set(selected.clone())
      >
        {label}
      </button>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/project?project={}", project.slug);
    let date = project
        .date
        .map(|date| format_date(date, DateLocale::Ukrainian));
    let description = project
        .description
        .clone()
        .map(|text| truncate(&text, CARD_DESCRIPTION_CHARS));
    let thumbnail = project.thumbnail.clone();
    let title = project.title.clone();

    view! {
      <article class="card">
        {thumbnail
          .map(|src| {
            view! {
              <div class="card-image">
                <img src=src alt=title.clone() />
              </div>
            }
          })}
        <h2>
          <a href=href>{project.title.clone()}</a>
        </h2>
        {project.role.clone().map(|role| view! { <div class="meta">{role}</div> })}
        {date.map(|date| view! { <div class="meta">{date}</div> })}
        {description.map(|text| view! { <p class="excerpt">{text}</p> })}
        <TagChips tags=project.tags.clone() />
      </article>
    }
}
