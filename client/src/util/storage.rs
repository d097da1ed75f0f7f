//! Browser `localStorage` slot for the persisted bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only durable client state. `SessionStore` is its only
//! writer; everything else reads identity from `AuthState`.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a browser with storage disabled behaves
//! like one with no saved token. SSR paths no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Durable key-value slot holding at most one token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserTokenStore {
    key: &'static str,
}

impl BrowserTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Blank values count as absent so a half-written slot never looks like a session.
fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.trim().is_empty())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            non_blank(storage.get_item(self.key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            non_blank(None)
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(self.key, token).is_err() {
                leptos::logging::warn!("token storage: write failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}
