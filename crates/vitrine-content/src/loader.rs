//! HTTP content loading with typed errors.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use vitrine_core::{Post, PostSummary, Project, locate_by_slug};

/// Result type alias using [`ContentError`].
pub type Result<T> = std::result::Result<T, ContentError>;

/// Content loading errors.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// No item with the requested slug in the collection.
    #[error("no item with slug \"{0}\"")]
    NotFound(String),
}

impl ContentError {
    /// Whether this error should render as a "not found" panel rather than
    /// a generic failure. Every loader error is terminal either way.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContentError::NotFound(_) | ContentError::Http { status: 404, .. }
        )
    }
}

/// Loader for the site's static JSON content directory.
#[derive(Debug, Clone)]
pub struct ContentSource {
    base: String,
}

impl Default for ContentSource {
    fn default() -> Self {
        Self::new("data")
    }
}

impl ContentSource {
    /// Create a loader rooted at `base` (no trailing slash required).
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Fetch and decode one JSON document.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url_for(path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ContentError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(ContentError::Http {
                status: response.status(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ContentError::Network(err.to_string()))?;

        serde_json::from_str(&body).map_err(|err| ContentError::Parse(err.to_string()))
    }

    /// Load one post from its per-slug document.
    pub async fn post(&self, slug: &str) -> Result<Post> {
        self.fetch_json(&format!("posts/{slug}.json"))
            .await
            .inspect_err(|err| log::error!("failed to load post \"{slug}\": {err}"))
    }

    /// Load the posts collection.
    pub async fn posts(&self) -> Result<Vec<PostSummary>> {
        self.fetch_json("posts/index.json")
            .await
            .inspect_err(|err| log::error!("failed to load posts index: {err}"))
    }

    /// Load the projects collection.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.fetch_json("projects/index.json")
            .await
            .inspect_err(|err| log::error!("failed to load projects index: {err}"))
    }

    /// Load one project by scanning the collection for its slug.
    pub async fn project(&self, slug: &str) -> Result<Project> {
        let projects = self.projects().await?;
        select_project(&projects, slug)
            .inspect_err(|err| log::error!("failed to load project \"{slug}\": {err}"))
    }
}

/// Pick a project out of a loaded collection by slug.
pub fn select_project(projects: &[Project], slug: &str) -> Result<Project> {
    locate_by_slug(projects, slug)
        .cloned()
        .ok_or_else(|| ContentError::NotFound(slug.to_string()))
}
