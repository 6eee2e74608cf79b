//! Session state: the one piece of client-side persistence.
//!
//! The stored token is an opaque credential the server issues on login and
//! expects back in the `Authorization` header on upload and list requests.
//! It is written once per successful login and never cleared — there is no
//! logout path.
//!
//! The store is injectable so the dispatch logic can be exercised without a
//! browser: the real client backs a [`Session`] with localStorage, tests
//! back it with [`MemoryStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Fixed browser-storage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";

/// Where the token lives between requests.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
}

/// Cheaply clonable handle to the current session.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// The stored token, if any login has succeeded so far.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Persist the token issued by a successful login.
    pub fn remember(&self, token: &str) {
        self.store.save(token);
    }

    /// Value for the `Authorization` header. The header is always sent,
    /// empty when nothing is stored.
    pub fn auth_header(&self) -> String {
        self.store.load().unwrap_or_default()
    }
}

/// In-memory store, used by tests and by any host without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }
}
