use crate::constants::TOKEN_STORAGE_KEY;
use crate::core::TokenStore;
use web_sys as web;

/// `localStorage`-backed token store. Degrades to a no-op when storage is
/// unavailable (private browsing, sandboxed frames).
pub struct LocalTokenStore {
    storage: Option<web::Storage>,
}

impl LocalTokenStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[session] localStorage unavailable; sign-in will not survive reloads");
        }
        Self { storage }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
    }

    fn save(&mut self, token: &str) {
        if let Some(s) = &self.storage {
            _ = s.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&mut self) {
        if let Some(s) = &self.storage {
            _ = s.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
