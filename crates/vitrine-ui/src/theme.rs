//! Light/dark theme preference: controller, storage, and components.
//!
//! The preference is an injectable store rather than DOM class state. The
//! controller owns the current value; the `dark` class on the root element
//! and the persisted key are derived output. With nothing persisted the
//! theme follows the OS color scheme live, without writing the store, until
//! the user picks explicitly.

use std::{cell::Cell, rc::Rc};

use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::Closure};

/// The single browser-storage key.
pub const THEME_STORAGE_KEY: &str = "theme";

const DARK_CLASS: &str = "dark";
const SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two-valued theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// The literal stored under [`THEME_STORAGE_KEY`].
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored literal; anything else is treated as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme derived from the OS color-scheme signal.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

/// Persistence seam for the theme preference.
pub trait PreferenceStore {
    /// Read the persisted preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Persist an explicit preference.
    fn save(&self, theme: Theme);
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStore(Cell<Option<Theme>>);

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.0.get()
    }

    fn save(&self, theme: Theme) {
        self.0.set(Some(theme));
    }
}

/// `localStorage`-backed store under [`THEME_STORAGE_KEY`].
#[derive(Debug, Default)]
pub struct StorageStore;

impl PreferenceStore for StorageStore {
    fn load(&self) -> Option<Theme> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|value| Theme::parse(&value))
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

/// Theme state machine over an injectable store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    current: Cell<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Initialize: a persisted value wins; otherwise derive from the OS
    /// signal without persisting.
    pub fn init(store: S, system_prefers_dark: bool) -> Self {
        let current = store
            .load()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self {
            store,
            current: Cell::new(current),
        }
    }

    /// The current theme.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Apply and persist an explicit choice.
    pub fn set(&self, theme: Theme) -> Theme {
        self.current.set(theme);
        self.store.save(theme);
        theme
    }

    /// Flip the current value. Persists, like any explicit choice.
    pub fn toggle(&self) -> Theme {
        self.set(self.current.get().flipped())
    }

    /// An OS color-scheme change. Honored only while no explicit
    /// preference is persisted; returns the newly applied theme.
    pub fn system_changed(&self, prefers_dark: bool) -> Option<Theme> {
        if self.store.load().is_some() {
            return None;
        }
        let theme = Theme::from_system(prefers_dark);
        self.current.set(theme);
        Some(theme)
    }
}

/// Whether the OS currently prefers a dark scheme.
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(SCHEME_QUERY).ok().flatten())
        .is_some_and(|media| media.matches())
}

/// Sync the `dark` class on the root element with the theme.
fn apply_to_root(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
    if let Err(err) = result {
        log::warn!("failed to apply theme class: {err:?}");
    }
}

/// Cloneable handle to the theme context.
#[derive(Clone)]
pub struct ThemeHandle {
    theme: RwSignal<Theme>,
    controller: Rc<ThemeController<StorageStore>>,
}

impl ThemeHandle {
    /// Reactive signal of the current theme.
    pub fn signal(&self) -> RwSignal<Theme> {
        self.theme
    }

    /// Explicitly choose a theme: applies to the DOM and persists.
    pub fn set(&self, theme: Theme) {
        let applied = self.controller.set(theme);
        apply_to_root(applied);
        self.theme.set(applied);
    }

    /// Flip the current theme.
    pub fn toggle(&self) {
        let applied = self.controller.toggle();
        apply_to_root(applied);
        self.theme.set(applied);
    }
}

/// Initialize the theme, subscribe to OS scheme changes for the page
/// lifetime, and provide a [`ThemeHandle`] context.
pub fn provide_theme() -> ThemeHandle {
    let controller = Rc::new(ThemeController::init(StorageStore, system_prefers_dark()));
    apply_to_root(controller.current());

    let theme = RwSignal::new(controller.current());
    let handle = ThemeHandle {
        theme,
        controller: Rc::clone(&controller),
    };

    if let Some(media) = web_sys::window().and_then(|window| window.match_media(SCHEME_QUERY).ok().flatten())
    {
        let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                if let Some(applied) = controller.system_changed(event.matches()) {
                    apply_to_root(applied);
                    theme.set(applied);
                }
            },
        );
        if media
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not subscribe to color-scheme changes");
        }
        listener.forget();
    }

    provide_context(StoredValue::new_local(handle.clone()));
    handle
}

/// The [`ThemeHandle`] provided by [`provide_theme`].
pub fn use_theme() -> ThemeHandle {
    expect_context::<StoredValue<ThemeHandle, LocalStorage>>().get_value()
}

/// Compact light/dark buttons; the active choice is highlighted.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let handle = use_theme();
    let current = handle.signal();
    let pick_light = handle.clone();
    let pick_dark = handle.clone();

    view! {
      <div class="theme-toggle-compact">
        <button
          class="btn theme-btn"
          class:active=move || current.get() == Theme::Light
          title="Light theme"
          aria-label="Light theme"
          on:click=move |_| pick_light.set(Theme::Light)
        >
          "☀️"
        </button>
        <button
          class="btn theme-btn"
          class:active=move || current.get() == Theme::Dark
          title="Dark theme"
          aria-label="Dark theme"
          on:click=move |_| pick_dark.set(Theme::Dark)
        >
          "🌙"
        </button>
      </div>
    }
}
