//! Tests against the published content files under `public/data/`.
//!
//! These exercise the same JSON the deployed site serves.

use std::{fs, path::Path};

use vitrine_core::{Post, PostSummary, Project, locate_by_slug};

fn read_fixture(relative: &str) -> Option<String> {
    let path = Path::new("../../public/data").join(relative);
    if !path.exists() {
        // Skip if running from a different working directory
        return None;
    }
    Some(fs::read_to_string(path).expect("fixture readable"))
}

#[test]
fn test_posts_index_parses() {
    let Some(raw) = read_fixture("posts/index.json") else {
        return;
    };
    let posts: Vec<PostSummary> = serde_json::from_str(&raw).expect("posts index parses");
    assert!(!posts.is_empty());
    assert!(locate_by_slug(&posts, "grid-stories").is_some());
    assert!(locate_by_slug(&posts, "not-a-post").is_none());
}

#[test]
fn test_per_slug_post_parses() {
    let Some(raw) = read_fixture("posts/grid-stories.json") else {
        return;
    };
    let post: Post = serde_json::from_str(&raw).expect("post parses");
    assert_eq!(post.title, "Grid Stories: Metering a Rooftop Array");
    assert_eq!(post.read_time, Some(6));
    assert!(post.content.as_deref().is_some_and(|c| c.contains("<p>")));
}

#[test]
fn test_projects_index_parses() {
    let Some(raw) = read_fixture("projects/index.json") else {
        return;
    };
    let projects: Vec<Project> = serde_json::from_str(&raw).expect("projects index parses");

    let dashboard = locate_by_slug(&projects, "solar-dashboard").expect("dashboard present");
    assert_eq!(dashboard.calculator_redirect(), None);
    assert!(dashboard.external_link().is_some());

    let calculator = locate_by_slug(&projects, "tariff-calculator").expect("calculator present");
    assert_eq!(
        calculator.calculator_redirect(),
        Some("calculators/tariff.html")
    );

    // "#" links are placeholders, not real destinations.
    let planner = locate_by_slug(&projects, "lens-planner").expect("planner present");
    assert_eq!(planner.external_link(), None);
}
