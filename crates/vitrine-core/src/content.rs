//! Content item types.
//!
//! Mirrors the published JSON files: per-slug post documents under
//! `data/posts/<slug>.json`, a posts collection at `data/posts/index.json`,
//! and the projects collection at `data/projects/index.json`. All fields
//! except the title are optional in the source data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::search::{FieldValue, Searchable, Tagged};

/// A single blog post document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title.
    pub title: String,

    /// Trusted HTML body (authored JSON, not user input).
    #[serde(default)]
    pub content: Option<String>,

    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Reading time in minutes.
    #[serde(default)]
    pub read_time: Option<u32>,

    /// Short excerpt for listings and meta descriptions.
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl Post {
    /// Meta description: the excerpt, falling back to the title.
    pub fn description(&self) -> &str {
        self.excerpt.as_deref().unwrap_or(&self.title)
    }
}

/// A posts-collection entry (`data/posts/index.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// URL-safe identifier.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Short excerpt for listings.
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Reading time in minutes.
    #[serde(default)]
    pub read_time: Option<u32>,
}

/// A projects-collection entry (`data/projects/index.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// URL-safe identifier.
    pub slug: String,

    /// Project title.
    pub title: String,

    /// Role line shown under the title.
    #[serde(default)]
    pub role: Option<String>,

    /// Short description for cards and meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Trusted HTML body; falls back to the description when absent.
    #[serde(default)]
    pub content: Option<String>,

    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// External project URL.
    #[serde(default)]
    pub link: Option<String>,

    /// Whether this entry diverts to a standalone calculator page.
    #[serde(default)]
    pub is_calculator: bool,

    /// Target page for the calculator redirect.
    #[serde(default)]
    pub calculator_path: Option<String>,
}

impl Project {
    /// Meta description: the description, falling back to the title.
    pub fn meta_description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.title)
    }

    /// External link, ignoring empty and `#` placeholders.
    pub fn external_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|link| !link.is_empty() && *link != "#")
    }

    /// Redirect target when this entry is a calculator page.
    pub fn calculator_redirect(&self) -> Option<&str> {
        if self.is_calculator {
            self.calculator_path.as_deref()
        } else {
            None
        }
    }
}

/// Items addressable by slug within a collection.
pub trait Slugged {
    /// The item's URL-safe identifier.
    fn slug(&self) -> &str;
}

impl Slugged for PostSummary {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Linear scan of a collection for a matching slug.
pub fn locate_by_slug<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

impl Tagged for Post {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for PostSummary {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for PostSummary {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "excerpt" | "description" => self.excerpt.as_deref().map(FieldValue::Text),
            "tags" => Some(FieldValue::Many(&self.tags)),
            _ => None,
        }
    }
}

impl Searchable for Project {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "description" => self.description.as_deref().map(FieldValue::Text),
            "role" => self.role.as_deref().map(FieldValue::Text),
            "tags" => Some(FieldValue::Many(&self.tags)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_projects() -> Vec<Project> {
        serde_json::from_str(
            r##"[
                {
                    "slug": "solar-dashboard",
                    "title": "Solar Dashboard",
                    "role": "Product / Frontend",
                    "description": "Monitoring dashboard for rooftop panels",
                    "tags": ["Energy", "Dashboards"],
                    "date": "2024-11-02",
                    "thumbnail": "assets/images/solar.png",
                    "link": "https://example.com/solar"
                },
                {
                    "slug": "tariff-calculator",
                    "title": "Tariff Calculator",
                    "isCalculator": true,
                    "calculatorPath": "calculators/tariff.html",
                    "link": "#"
                }
            ]"##,
        )
        .expect("fixture parses")
    }

    #[test]
    fn test_project_camel_case_fields() {
        let projects = sample_projects();
        assert!(projects[1].is_calculator);
        assert_eq!(
            projects[1].calculator_path.as_deref(),
            Some("calculators/tariff.html")
        );
    }

    #[test]
    fn test_locate_by_slug_present() {
        let projects = sample_projects();
        let found = locate_by_slug(&projects, "solar-dashboard").expect("present slug");
        assert_eq!(found.title, "Solar Dashboard");
    }

    #[test]
    fn test_locate_by_slug_absent() {
        let projects = sample_projects();
        assert!(locate_by_slug(&projects, "missing").is_none());
    }

    #[test]
    fn test_calculator_redirect_requires_flag() {
        let projects = sample_projects();
        assert_eq!(projects[0].calculator_redirect(), None);
        assert_eq!(
            projects[1].calculator_redirect(),
            Some("calculators/tariff.html")
        );
    }

    #[test]
    fn test_external_link_ignores_placeholder() {
        let projects = sample_projects();
        assert_eq!(
            projects[0].external_link(),
            Some("https://example.com/solar")
        );
        assert_eq!(projects[1].external_link(), None);
    }

    #[test]
    fn test_post_optional_fields_default() {
        let post: Post = serde_json::from_str(r#"{ "title": "Hello" }"#).expect("parses");
        assert!(post.content.is_none());
        assert!(post.tags.is_empty());
        assert!(post.date.is_none());
        assert_eq!(post.description(), "Hello");
    }

    #[test]
    fn test_post_read_time_field_name() {
        let post: Post =
            serde_json::from_str(r#"{ "title": "Hello", "readTime": 4 }"#).expect("parses");
        assert_eq!(post.read_time, Some(4));
    }
}
