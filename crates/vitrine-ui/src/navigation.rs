//! Site navigation and breadcrumb components.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use vitrine_core::{Crumb, page_segment};

use crate::theme::ThemeToggle;

/// Viewport width below which the navigation collapses behind a toggle.
const NARROW_VIEWPORT_PX: f64 = 920.0;

/// A navigation link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,

    /// Leading icon, if any.
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            icon: None,
        }
    }

    /// Set the leading icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The site's fixed navigation links.
pub fn site_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/").with_icon("🏠"),
        NavItem::new("Interactive Lab", "/projects").with_icon("🧪"),
        NavItem::new("GPTs Lab", "/gpts").with_icon("🤖"),
        NavItem::new("Blog", "/blog").with_icon("📝"),
    ]
}

/// Whether a nav link matches the current path.
///
/// The link is active when its URL contains the path's final segment;
/// detail pages therefore light up their listing's link (`/project` keeps
/// `/projects` highlighted). An empty path falls back to the index page.
pub fn is_active(url: &str, current_path: &str) -> bool {
    let segment = page_segment(current_path);
    if segment == "index" {
        return url == "/" || url.contains("index");
    }
    url.contains(&segment)
}

fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width < NARROW_VIEWPORT_PX)
}

fn watch_viewport(narrow: RwSignal<bool>) {
    use wasm_bindgen::{JsCast, prelude::Closure};

    let Some(window) = web_sys::window() else {
        return;
    };
    let listener = Closure::<dyn FnMut()>::new(move || narrow.set(is_narrow_viewport()));
    if window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not subscribe to resize events");
    }
    listener.forget();
}

/// Current year for the footer line.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Site navigation panel: brand, links, contact CTA, theme buttons, and
/// the footer year. Collapses behind a toggle on narrow viewports.
#[component]
pub fn Navigation(
    /// Current path for active highlighting.
    current_path: Signal<String>,
    /// Navigation items.
    #[prop(default = site_nav())]
    items: Vec<NavItem>,
) -> impl IntoView {
    let narrow = RwSignal::new(is_narrow_viewport());
    let collapsed = RwSignal::new(true);
    watch_viewport(narrow);

    view! {
      <div class="aside-inner">
        <Show when=move || narrow.get()>
          <button
            class="nav-toggle"
            aria-label="Toggle navigation"
            on:click=move |_| collapsed.update(|hidden| *hidden = !*hidden)
          >
            "☰"
          </button>
        </Show>

        <div class="nav-panel" class:hidden=move || narrow.get() && collapsed.get()>
          <div class="brand">
            <a href="/" class="logo-link">
              <div class="logo-placeholder">
                <div class="logo-initial">"V"</div>
              </div>
            </a>
            <p class="tagline">"Product • Frontend • Energy/CCTV"</p>
          </div>

          <nav>
            <div class="nav-title">"Navigation"</div>
            <For
              each=move || items.clone()
              key=|item| item.url.clone()
              children=move |item| {
                let url = item.url.clone();
                let active = Memo::new(move |_| is_active(&url, &current_path.get()));
                view! {
                  <a
                    class="nav-link"
                    class:active=active
                    href=item.url.clone()
                    aria-current=move || { if active.get() { Some("page") } else { None } }
                  >
                    {item.icon.clone()}
                    " "
                    <span>{item.label.clone()}</span>
                  </a>
                }
              }
            />
          </nav>

          <div class="grow"></div>

          <div class="cta">
            <a class="btn btn-accent" href="/#contact">"Get in touch"</a>
            <ThemeToggle />
            <div class="meta">"© " {current_year()}</div>
          </div>
        </div>
      </div>
    }
}

/// Breadcrumb trail. Empty trails render nothing.
#[component]
pub fn Breadcrumbs(
    /// The crumbs, home first; an unlinked crumb is the current page.
    #[prop(into)]
    trail: Signal<Vec<Crumb>>,
) -> impl IntoView {
    view! {
      <Show when=move || !trail.get().is_empty()>
        <nav class="breadcrumbs" aria-label="Breadcrumb">
          <For
            each={move || trail.get().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(index, _)| *index
            children=move |(index, crumb)| {
              let Crumb { label, href } = crumb;
              view! {
                <div class="breadcrumb-item">
                  <Show when={move || index > 0}>
                    <span class="breadcrumb-separator" aria-hidden="true">"›"</span>
                  </Show>
                  {match href {
                    Some(href) => {
                      view! {
                        <a href=href class="breadcrumb-link">
                          {label.clone()}
                        </a>
                      }
                        .into_any()
                    }
                    None => {
                      view! {
                        <span class="breadcrumb-current" aria-current="page">
                          {label.clone()}
                        </span>
                      }
                        .into_any()
                    }
                  }}
                </div>
              }
            }
          />
        </nav>
      </Show>
    }
}
