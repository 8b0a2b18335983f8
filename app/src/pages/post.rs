//! Single-post page: `/post?post=<slug>`.

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;
use vitrine_content::ContentSource;
use vitrine_core::{Post, trail_for};
use vitrine_ui::{Breadcrumbs, ErrorPanel, LoadingPanel, PostArticle};

use super::{FetchState, is_current_slug};

#[component]
pub fn PostPage() -> impl IntoView {
    let query = use_query_map();
    let slug = Memo::new(move |_| query.read().get("post"));

    let state = RwSignal::new(FetchState::Loading);
    Effect::new(move |_| match slug.get() {
        None => state.set(FetchState::Missing),
        Some(requested) => {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let outcome = ContentSource::default().post(&requested).await;
                // A navigation while this fetch was in flight supersedes it.
                if !is_current_slug(&requested, slug.get_untracked().as_deref()) {
                    return;
                }
                match outcome {
                    Ok(post) => state.set(FetchState::Loaded(post)),
                    Err(_) => state.set(FetchState::Failed),
                }
            });
        }
    });

    view! {
      {move || match state.get() {
        FetchState::Loading => view! { <LoadingPanel message="Loading post…" /> }.into_any(),
        FetchState::Missing => {
          view! {
            <Breadcrumbs trail=trail_for("post", None) />
            <ErrorPanel
              title="Post not specified"
              detail="No post was requested."
              back_href="/blog"
              back_label="← Back to the blog"
            />
          }
            .into_any()
        }
        FetchState::Loaded(post) => view! { <LoadedPost post=post /> }.into_any(),
        FetchState::Failed => {
          view! {
            <Breadcrumbs trail=trail_for("post", None) />
            <ErrorPanel
              title="Post not found"
              detail="The post could not be found or failed to load."
              back_href="/blog"
              back_label="← Back to the blog"
            />
          }
            .into_any()
        }
      }}
    }
}

/// A successfully loaded post: breadcrumbs with the real title, document
/// title and meta tags, and the article fragment.
#[component]
fn LoadedPost(post: Post) -> impl IntoView {
    let title = crate::page_title(&post.title);
    let description = post.description().to_string();
    let published = post.date.map(|date| date.to_string());
    let trail = trail_for("post", Some(&post.title));

    view! {
      <Title text=title.clone() />
      <Meta name="description" content=description.clone() />
      <Meta property="og:title" content=title />
      <Meta property="og:description" content=description />
      <Meta property="og:type" content="article" />
      {published
        .map(|date| {
          view! { <Meta property="article:published_time" content=date /> }
        })}

      <Breadcrumbs trail=trail />
      <PostArticle post=post />
    }
}
