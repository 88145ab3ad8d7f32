use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme-preference";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} mode")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
}

pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait ColorSchemeProbe {
    /// `None` when the platform exposes no color-scheme signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Where the active theme becomes visible, e.g. a class on the root element.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeStore<S, P, R> {
    storage: S,
    probe: P,
    surface: R,
}

impl<S, P, R> ThemeStore<S, P, R>
where
    S: PreferenceStorage,
    P: ColorSchemeProbe,
    R: ThemeSurface,
{
    pub fn new(storage: S, probe: P, surface: R) -> Self {
        Self {
            storage,
            probe,
            surface,
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        let value = match self.storage.load(THEME_STORAGE_KEY) {
            Ok(value) => value?,
            Err(err) => {
                log::debug!("theme preference read failed: {err}");
                return None;
            }
        };

        let theme = Theme::parse(&value);
        if theme.is_none() {
            log::debug!("ignoring stored theme preference {value:?}");
        }
        theme
    }

    pub fn initial_theme(&self) -> Theme {
        self.stored_theme().unwrap_or_else(|| {
            if self.probe.prefers_dark().unwrap_or(false) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    }

    pub fn apply(&self, theme: Theme) {
        self.surface.apply(theme);
    }

    /// Flips the theme, persists it when storage allows, and applies it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(err) = self.storage.store(THEME_STORAGE_KEY, next.as_str()) {
            log::debug!("theme preference write failed: {err}");
        }
        self.surface.apply(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
        rc::Rc,
    };

    #[derive(Clone, Default)]
    struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable);
            }
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Rejected("QuotaExceededError".to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FixedProbe {
        prefers_dark: Option<bool>,
        queried: Cell<bool>,
    }

    impl FixedProbe {
        fn dark() -> Self {
            Self {
                prefers_dark: Some(true),
                ..Self::default()
            }
        }
    }

    impl ColorSchemeProbe for FixedProbe {
        fn prefers_dark(&self) -> Option<bool> {
            self.queried.set(true);
            self.prefers_dark
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        applied: Rc<RefCell<Vec<Theme>>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn stored_value_wins_over_system_signal() {
        let store = ThemeStore::new(
            MemoryStorage::with(THEME_STORAGE_KEY, "light"),
            FixedProbe::dark(),
            RecordingSurface::default(),
        );

        assert_eq!(store.initial_theme(), Theme::Light);
        assert!(!store.probe.queried.get());
    }

    #[test]
    fn system_signal_used_without_stored_value() {
        let store = ThemeStore::new(
            MemoryStorage::default(),
            FixedProbe::dark(),
            RecordingSurface::default(),
        );

        assert_eq!(store.initial_theme(), Theme::Dark);
    }

    #[test]
    fn no_signal_defaults_to_light() {
        let store = ThemeStore::new(
            MemoryStorage::default(),
            FixedProbe::default(),
            RecordingSurface::default(),
        );

        assert_eq!(store.initial_theme(), Theme::Light);
    }

    #[test]
    fn corrupt_stored_value_falls_back_to_system() {
        let store = ThemeStore::new(
            MemoryStorage::with(THEME_STORAGE_KEY, "sepia"),
            FixedProbe::dark(),
            RecordingSurface::default(),
        );

        assert_eq!(store.initial_theme(), Theme::Dark);
    }

    #[test]
    fn read_failure_falls_back_to_light() {
        let storage = MemoryStorage {
            fail_reads: true,
            ..MemoryStorage::default()
        };
        let store = ThemeStore::new(storage, FixedProbe::default(), RecordingSurface::default());

        assert_eq!(store.initial_theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let storage = MemoryStorage::default();
        let surface = RecordingSurface::default();
        let store = ThemeStore::new(storage.clone(), FixedProbe::default(), surface.clone());

        let next = store.toggle(Theme::Light);

        assert_eq!(next, Theme::Dark);
        assert_eq!(
            storage.entries.borrow().get(THEME_STORAGE_KEY).map(String::as_str),
            Some("dark")
        );
        assert_eq!(*surface.applied.borrow(), vec![Theme::Dark]);

        let reloaded = ThemeStore::new(storage, FixedProbe::default(), RecordingSurface::default());
        assert_eq!(reloaded.initial_theme(), Theme::Dark);
        assert!(!reloaded.probe.queried.get());
    }

    #[test]
    fn write_failure_still_switches_theme() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let surface = RecordingSurface::default();
        let store = ThemeStore::new(storage.clone(), FixedProbe::default(), surface.clone());

        assert_eq!(store.toggle(Theme::Dark), Theme::Light);
        assert_eq!(*surface.applied.borrow(), vec![Theme::Light]);
        assert!(storage.entries.borrow().is_empty());
    }

    #[test]
    fn toggle_label_names_the_next_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn storage_error_messages() {
        assert_eq!(
            StorageError::Rejected("QuotaExceededError".to_string()).to_string(),
            "local storage rejected the operation: QuotaExceededError"
        );
    }
}
