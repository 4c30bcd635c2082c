// Host-side tests for the admin session lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod session {
    include!("../src/core/session.rs");
}

use session::*;

#[derive(Clone, Debug, Default)]
struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

#[test]
fn fresh_store_starts_signed_out() {
    let s = Session::restore(MemoryTokenStore::default());
    assert!(!s.is_signed_in());
    assert_eq!(s.bearer(), None);
}

#[test]
fn saved_token_is_restored() {
    let s = Session::restore(MemoryTokenStore::with_token("abc"));
    assert!(s.is_signed_in());
    assert_eq!(s.bearer().as_deref(), Some("Bearer abc"));
}

#[test]
fn blank_saved_token_is_ignored() {
    let s = Session::restore(MemoryTokenStore::with_token("  "));
    assert!(!s.is_signed_in());
}

#[test]
fn login_persists_and_logout_clears() {
    let mut store = MemoryTokenStore::default();
    {
        let mut s = Session::restore(&mut store);
        s.login("t1");
        assert!(s.is_signed_in());
        s.login("t2");
        assert_eq!(s.bearer().as_deref(), Some("Bearer t2"));
    }
    assert_eq!(store.load().as_deref(), Some("t2"));

    {
        let mut s = Session::restore(&mut store);
        assert!(s.is_signed_in());
        s.logout();
        assert!(!s.is_signed_in());
    }
    assert_eq!(store.load(), None);
}

#[test]
fn relogin_after_logout_survives_reload() {
    let mut store = MemoryTokenStore::default();
    {
        let mut s = Session::restore(&mut store);
        s.login("first");
        s.logout();
        s.login("second");
    }
    let restored = Session::restore(store);
    assert_eq!(restored.bearer().as_deref(), Some("Bearer second"));
}
