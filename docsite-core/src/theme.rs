//! Light/dark theme persisted in a key/value store.
//!
//! The browser binding implements [`ThemeStore`] over `localStorage`; tests
//! use [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::{SiteError, SiteResult};

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Persisted and attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon on the toggle button: what clicking it switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SiteError::InvalidTheme(other.to_string())),
        }
    }
}

/// A string key/value store.
pub trait ThemeStore {
    /// Read a key.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the store is unavailable.
    fn load(&self, key: &str) -> SiteResult<Option<String>>;

    /// Write a key.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the write is rejected.
    fn save(&mut self, key: &str, value: &str) -> SiteResult<()>;

    /// Delete a key.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the delete is rejected.
    fn remove(&mut self, key: &str) -> SiteResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Read a key directly.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SiteResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads, toggles and persists the theme.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    legacy_keys: Vec<String>,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Load the persisted theme.
    ///
    /// The canonical key wins; otherwise the first legacy key holding a valid
    /// value is migrated to the canonical key. Unreadable stores and unknown
    /// values fall back to the default theme.
    pub fn load(mut store: S, config: &ThemeConfig) -> Self {
        let current = match Self::read(&store, &config.storage_key) {
            Some(theme) => theme,
            None => Self::migrate(&mut store, config).unwrap_or_default(),
        };
        tracing::debug!("Theme loaded: {current}");
        Self {
            store,
            key: config.storage_key.clone(),
            legacy_keys: config.legacy_keys.clone(),
            current,
        }
    }

    fn read(store: &S, key: &str) -> Option<Theme> {
        match store.load(key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("Ignoring stored theme under '{key}': {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Theme store unreadable: {e}");
                None
            }
        }
    }

    fn migrate(store: &mut S, config: &ThemeConfig) -> Option<Theme> {
        let (legacy, theme) = config
            .legacy_keys
            .iter()
            .find_map(|key| Self::read(store, key).map(|t| (key, t)))?;
        tracing::info!("Migrating theme from '{legacy}' to '{}'", config.storage_key);
        if let Err(e) = store
            .save(&config.storage_key, theme.as_str())
            .and_then(|()| store.remove(legacy))
        {
            tracing::warn!("Theme migration failed: {e}");
        }
        Some(theme)
    }

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Canonical storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Keys migrated on load.
    #[must_use]
    pub fn legacy_keys(&self) -> &[String] {
        &self.legacy_keys
    }

    /// Switch to a theme and persist it.
    ///
    /// The in-memory theme changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write is rejected.
    pub fn set(&mut self, theme: Theme) -> SiteResult<Theme> {
        self.current = theme;
        self.store.save(&self.key, theme.as_str())?;
        Ok(theme)
    }

    /// Flip the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write is rejected.
    pub fn toggle(&mut self) -> SiteResult<Theme> {
        self.set(self.current.toggled())
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
