use web_sys::{window, Storage};
use shared::constants::THEME_KEY;
use shared::session::{Session, SessionStore};

/// `localStorage` adapter. Every call degrades to a no-op when storage is
/// unavailable (private browsing, sandboxed iframes).
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            storage: window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl SessionStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.storage
            .as_ref()
            .map_or(false, |s| s.set_item(key, value).is_ok())
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = &self.storage {
            storage.remove_item(key).ok();
        }
    }
}

pub fn browser_session() -> Session<BrowserStorage> {
    Session::new(BrowserStorage::local())
}

pub fn load_dark_mode() -> bool {
    BrowserStorage::local()
        .get_item(THEME_KEY)
        .map_or(false, |theme| theme == "dark")
}

pub fn apply_theme(dark_mode: bool) {
    let theme = if dark_mode { "dark" } else { "light" };
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        html.set_class_name(theme);
    }
    BrowserStorage::local().set_item(THEME_KEY, theme);
}
