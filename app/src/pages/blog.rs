//! Blog listing page: `/blog`.

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use vitrine_content::ContentSource;
use vitrine_core::{DateLocale, PostSummary, format_date, trail_for, truncate};
use vitrine_ui::{ArticleMeta, Breadcrumbs, ErrorPanel, LoadingPanel, TagChips};

use super::FetchState;

const EXCERPT_CHARS: usize = 160;

#[component]
pub fn BlogPage() -> impl IntoView {
    let state = RwSignal::new(FetchState::Loading);
    Effect::new(move |_| {
        spawn_local(async move {
            match ContentSource::default().posts().await {
                Ok(posts) => state.set(FetchState::Loaded(posts)),
                Err(_) => state.set(FetchState::Failed),
            }
        });
    });

    view! {
      <Title text=crate::page_title("Blog") />
      <Breadcrumbs trail=trail_for("blog", None) />

      <section class="page-header">
        <h1>"Blog"</h1>
      </section>

      {move || match state.get() {
        FetchState::Loaded(posts) => {
          view! {
            <div class="post-list">
              <For
                each=move || posts.clone()
                key=|post| post.slug.clone()
                children=move |post| view! { <PostCard post=post /> }
              />
            </div>
          }
            .into_any()
        }
        FetchState::Failed => {
          view! {
            <ErrorPanel
              title="Blog unavailable"
              detail="The posts could not be loaded."
              back_href="/"
              back_label="← Back home"
            />
          }
            .into_any()
        }
        _ => view! { <LoadingPanel message="Loading posts…" /> }.into_any(),
      }}
    }
}

#[component]
fn PostCard(post: PostSummary) -> impl IntoView {
    let href = format!("/post?post={}", post.slug);
    let date = post.date.map(|date| format_date(date, DateLocale::Ukrainian));
    let excerpt = post.excerpt.clone().map(|text| truncate(&text, EXCERPT_CHARS));

    view! {
      <article class="card">
        <h2>
          <a href=href>{post.title.clone()}</a>
        </h2>
        <ArticleMeta date=date read_time=post.read_time />
        {excerpt.map(|text| view! { <p class="excerpt">{text}</p> })}
        <TagChips tags=post.tags.clone() />
      </article>
    }
}
