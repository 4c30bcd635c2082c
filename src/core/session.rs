/// Somewhere a bearer token survives page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str);
    fn clear(&mut self);
}

impl<S: TokenStore + ?Sized> TokenStore for &mut S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, token: &str) {
        (**self).save(token)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Admin sign-in state. The token is only read through this object.
#[derive(Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Picks up a token saved by an earlier visit; blank tokens are ignored.
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.trim().is_empty());
        Self { store, token }
    }

    pub fn login(&mut self, token: &str) {
        self.store.save(token);
        self.token = Some(token.to_string());
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }

    #[inline]
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}
