//! Vitrine UI Components
//!
//! Leptos components for the Vitrine portfolio frontend.
//!
//! # Components
//!
//! ## Navigation
//! - [`Navigation`] - Site navigation panel with active-link highlighting
//! - [`Breadcrumbs`] - Breadcrumb trail rendering
//!
//! ## Article
//! - [`PostArticle`] / [`ProjectArticle`] - Content fragments for loaded items
//! - [`ArticleMeta`] - Date and reading-time line
//! - [`TagChips`] - Tag chip row
//! - [`LoadingPanel`] / [`ErrorPanel`] - Fetch lifecycle panels
//!
//! ## Theme
//! - [`ThemeToggle`] - Light/dark buttons bound to the theme context
//! - [`provide_theme`] / [`use_theme`] - Context wiring for the persisted
//!   preference

pub mod article;
pub mod debounce;
pub mod navigation;
pub mod theme;

pub use article::{
    ArticleMeta, ErrorPanel, LoadingPanel, PostArticle, ProjectArticle, TagChips,
};
pub use debounce::Debounce;
pub use navigation::{Breadcrumbs, NavItem, Navigation, is_active, site_nav};
pub use theme::{
    MemoryStore, PreferenceStore, Theme, ThemeController, ThemeHandle, ThemeToggle,
    provide_theme, use_theme,
};
