use crate::{
    menu::ScrollLock,
    navigation::{SectionBounds, ViewportQuery},
    theme::{ColorSchemeProbe, PreferenceStorage, StorageError, Theme, ThemeStore, ThemeSurface},
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Event, ScrollBehavior, ScrollToOptions, Storage, Window,
};

pub struct DomViewport;

impl ViewportQuery for DomViewport {
    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn section_bounds(&self, anchor: &str) -> Option<SectionBounds> {
        let element = window()?.document()?.get_element_by_id(anchor)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn storage_error(value: JsValue) -> StorageError {
    StorageError::Rejected(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub struct LocalPreferenceStorage;

impl PreferenceStorage for LocalPreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(storage_error)
    }
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

pub struct MediaColorScheme;

impl ColorSchemeProbe for MediaColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        media_matches("(prefers-color-scheme: dark)")
    }
}

pub struct RootThemeSurface;

impl ThemeSurface for RootThemeSurface {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root
            .class_list()
            .toggle_with_force("dark", matches!(theme, Theme::Dark));
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub type DomThemeStore = ThemeStore<LocalPreferenceStorage, MediaColorScheme, RootThemeSurface>;

pub fn theme_store() -> DomThemeStore {
    ThemeStore::new(LocalPreferenceStorage, MediaColorScheme, RootThemeSurface)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("failed to listen for {event}: {err:?}");
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
