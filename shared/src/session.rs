use std::cell::RefCell;
use std::collections::HashMap;
use crate::constants::SESSION_USERNAME_KEY;

/// Key/value storage the session is persisted in (`localStorage` in the browser).
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> bool;
    fn remove_item(&self, key: &str);
}

/// Who is logged in. The username is opaque; only its presence matters.
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<String> {
        self.store
            .get_item(SESSION_USERNAME_KEY)
            .filter(|name| !name.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Returns false if the store refused the write.
    pub fn login(&self, username: &str) -> bool {
        let saved = self.store.set_item(SESSION_USERNAME_KEY, username);
        if !saved {
            log::warn!("Could not persist session for {}", username);
        }
        saved
    }

    pub fn logout(&self) {
        self.store.remove_item(SESSION_USERNAME_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        true
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
