//! Light/dark theme backed by `localStorage`.

use std::rc::Rc;

use docsite_core::{SiteError, SiteResult, Theme, ThemeController, ThemeStore};
use web_sys::Storage;

use crate::dom::{self, describe, AppError, AppResult};
use crate::site::SiteHandle;

/// [`ThemeStore`] over `window.localStorage`.
///
/// Private browsing modes may deny storage entirely; every operation then
/// fails with [`SiteError::Storage`] and the theme still works in memory.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Open the window's local storage.
    pub fn open() -> Self {
        let storage = dom::window()
            .ok()
            .and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> SiteResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".to_string()))
    }
}

impl ThemeStore for LocalStore {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::Storage(describe(&e)))
    }

    fn save(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(describe(&e)))
    }

    fn remove(&mut self, key: &str) -> SiteResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SiteError::Storage(describe(&e)))
    }
}

/// Apply the persisted theme and wire the toggle buttons.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let controller = ThemeController::load(LocalStore::open(), &site.config.theme);
    apply(site, controller.current())?;
    *site.theme.borrow_mut() = Some(controller);

    let document = dom::document()?;
    for button in dom::query_all(&document, &site.config.selectors.theme_toggle) {
        let handle = Rc::clone(site);
        dom::listen(&button, "click", move |_| {
            if let Err(e) = toggle(&handle) {
                tracing::warn!("Theme toggle failed: {e}");
            }
        })?;
    }
    Ok(())
}

/// Flip the theme, persist it and restyle the page.
///
/// A failed write is logged; the page still switches.
///
/// # Errors
///
/// Returns an error if the theme feature is not installed.
pub fn toggle(site: &SiteHandle) -> AppResult<Theme> {
    let theme = {
        let mut slot = site.theme.borrow_mut();
        let controller = slot.as_mut().ok_or(AppError::NotMounted)?;
        if let Err(e) = controller.toggle() {
            tracing::warn!("Theme not persisted: {e}");
        }
        controller.current()
    };
    apply(site, theme)?;
    Ok(theme)
}

/// The active theme, if the theme feature is installed.
pub fn current(site: &SiteHandle) -> Option<Theme> {
    site.theme.borrow().as_ref().map(ThemeController::current)
}

fn apply(site: &SiteHandle, theme: Theme) -> AppResult<()> {
    let document = dom::document()?;
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("document element".to_string()))?;
    root.set_attribute("data-theme", theme.as_str())?;
    for button in dom::query_all(&document, &site.config.selectors.theme_toggle) {
        if let Ok(Some(icon)) = button.query_selector("i") {
            icon.set_class_name(theme.toggle_icon());
        }
    }
    tracing::debug!("Theme applied: {theme}");
    Ok(())
}
