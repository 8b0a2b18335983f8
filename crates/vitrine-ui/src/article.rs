//! Content fragments for loaded items, plus the fetch lifecycle panels.
//!
//! Item bodies are trusted HTML from authored JSON and are inserted
//! unescaped; plain-text fields that end up in markup go through
//! [`escape_html`].

use leptos::prelude::*;
use vitrine_core::{DateLocale, Post, Project, escape_html, format_date};

/// Tag chip row; renders nothing for an empty list.
#[component]
pub fn TagChips(
    /// The tags, in authored order.
    tags: Vec<String>,
) -> impl IntoView {
    let tags = StoredValue::new(tags);

    view! {
      <Show when=move || !tags.get_value().is_empty()>
        <div class="tags">
          <For
            each=move || tags.get_value()
            key=|tag| tag.clone()
            children=move |tag| {
              view! { <span class="chip">"#" {tag}</span> }
            }
          />
        </div>
      </Show>
    }
}

/// Date and reading-time line under an article title.
#[component]
pub fn ArticleMeta(
    /// Formatted publication date.
    date: Option<String>,
    /// Reading time in minutes.
    read_time: Option<u32>,
) -> impl IntoView {
    let has_date = date.is_some();
    let date_value = date.clone();
    let has_read_time = read_time.is_some();
    let read_time_value = read_time.unwrap_or(0);

    view! {
      <div class="meta">
        <Show when=move || has_date>
          <time class="article-date">"Published " {date_value.clone()}</time>
        </Show>
        <Show when=move || has_read_time>
          <span class="article-reading-time">" • " {read_time_value} " min read"</span>
        </Show>
      </div>
    }
}

/// A loaded post rendered as an article fragment.
#[component]
pub fn PostArticle(
    /// The post to render.
    post: Post,
) -> impl IntoView {
    let date = post.date.map(|date| format_date(date, DateLocale::Ukrainian));
    let body = post.content.clone().unwrap_or_default();

    view! {
      <article class="post-article">
        <header class="post-header">
          <h1>{post.title.clone()}</h1>
          <ArticleMeta date=date read_time=post.read_time />
          <TagChips tags=post.tags.clone() />
        </header>

        // Trusted HTML body.
        <div class="post-content" inner_html=body></div>

        <footer class="post-footer">
          <a href="/blog" class="btn">"← Back to the blog"</a>
        </footer>
      </article>
    }
}

/// Body HTML for a project: the content field, or the description wrapped
/// in a paragraph (escaped, since the description is plain text).
pub fn project_body_html(project: &Project) -> String {
    match (&project.content, &project.description) {
        (Some(content), _) => content.clone(),
        (None, Some(description)) => format!("<p>{}</p>", escape_html(description)),
        (None, None) => String::new(),
    }
}

/// A loaded project rendered as an article fragment.
#[component]
pub fn ProjectArticle(
    /// The project to render.
    project: Project,
) -> impl IntoView {
    let date = project
        .date
        .map(|date| format_date(date, DateLocale::Ukrainian));
    let body = project_body_html(&project);
    let thumbnail = project.thumbnail.clone();
    let link = project.external_link().map(str::to_owned);
    let title = project.title.clone();

    view! {
      <article class="project-article">
        <header class="project-header">
          <h1>{project.title.clone()}</h1>
          {project.role.clone().map(|role| view! { <div class="meta">{role}</div> })}
          <ArticleMeta date=date read_time=None />
          <TagChips tags=project.tags.clone() />
        </header>

        {thumbnail
          .map(|src| {
            view! {
              <div class="project-image">
                <img src=src alt=title.clone() />
              </div>
            }
          })}

        // Trusted HTML body.
        <div class="project-content" inner_html=body></div>

        {link
          .map(|href| {
            view! {
              <footer class="project-footer">
                <a href=href class="btn btn-accent" target="_blank" rel="noopener">
                  "Open project →"
                </a>
              </footer>
            }
          })}
      </article>
    }
}

/// Spinner panel shown while a fetch is outstanding.
#[component]
pub fn LoadingPanel(
    /// Message under the spinner.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
      <div class="loading-state">
        <div class="spinner"></div>
        <p>{message}</p>
      </div>
    }
}

/// Terminal error panel with a link back to the listing page.
#[component]
pub fn ErrorPanel(
    /// Headline.
    #[prop(into)]
    title: String,
    /// Explanatory line.
    #[prop(into)]
    detail: String,
    /// Back-link target.
    #[prop(into)]
    back_href: String,
    /// Back-link label.
    #[prop(into)]
    back_label: String,
) -> impl IntoView {
    view! {
      <div class="error-message">
        <h1>"😔 " {title}</h1>
        <p>{detail}</p>
        <a href=back_href class="btn btn-accent">
          {back_label}
        </a>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(content: Option<&str>, description: Option<&str>) -> Project {
        let mut value = serde_json::json!({ "slug": "p", "title": "P" });
        if let Some(content) = content {
            value["content"] = content.into();
        }
        if let Some(description) = description {
            value["description"] = description.into();
        }
        serde_json::from_value(value).expect("fixture parses")
    }

    #[test]
    fn test_project_body_prefers_content() {
        let project = project(Some("<h2>Body</h2>"), Some("ignored"));
        assert_eq!(project_body_html(&project), "<h2>Body</h2>");
    }

    #[test]
    fn test_project_body_falls_back_to_escaped_description() {
        let project = project(None, Some("a <b> & c"));
        assert_eq!(project_body_html(&project), "<p>a &lt;b&gt; &amp; c</p>");
    }

    #[test]
    fn test_project_body_empty() {
        let project = project(None, None);
        assert_eq!(project_body_html(&project), "");
    }
}
