//! Session store: the single writer of auth state and the persisted token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionStore` at mount, provides it via context, and
//! spawns `hydrate()` once in the browser. Login/register forms and the
//! logout button call into it; guards only observe the `AuthState` it commits.
//!
//! DESIGN
//! ======
//! The store is generic over three seams (`AuthApi`, `TokenStore`,
//! `SessionCell`) so the commit rules run under plain unit tests. Every
//! commit bumps a generation counter. `hydrate` remembers the generation it
//! started at and drops its result if anything committed in the meantime,
//! so a slow token check cannot overwrite a fresh login or resurrect a
//! logged-out session. Login/register/logout are user-initiated and always
//! commit when they succeed.
//!
//! ERROR HANDLING
//! ==============
//! `hydrate` never reports errors: every failure settles to signed-out.
//! `login`/`register` return `ApiError` and leave prior state untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::api::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, UserType};
use crate::state::auth::AuthState;
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// Where committed `AuthState` lives.
pub trait SessionCell {
    fn read(&self) -> AuthState;
    fn write(&self, next: AuthState);
}

impl SessionCell for RwSignal<AuthState> {
    fn read(&self) -> AuthState {
        self.get_untracked()
    }

    fn write(&self, next: AuthState) {
        self.set(next);
    }
}

/// The store the app provides through context.
pub type AppSession = SessionStore<HttpAuthApi, BrowserTokenStore, RwSignal<AuthState>>;

/// Owns the session lifecycle: hydrate, login, register, logout.
#[derive(Clone, Debug)]
pub struct SessionStore<A, T, C> {
    api: A,
    tokens: T,
    cell: C,
    generation: Arc<AtomicU64>,
}

impl<A, T, C> SessionStore<A, T, C>
where
    A: AuthApi,
    T: TokenStore,
    C: SessionCell,
{
    pub fn new(api: A, tokens: T, cell: C) -> Self {
        Self { api, tokens, cell, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Snapshot of the committed state.
    pub fn state(&self) -> AuthState {
        self.cell.read()
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn commit(&self, next: AuthState) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cell.write(next);
    }

    /// Restore the session from the persisted token.
    ///
    /// Settles to signed-out without a request when no token is stored.
    /// Safe to call again later to re-sync; it never re-enters loading.
    pub async fn hydrate(&self) {
        let started = self.generation();
        let Some(token) = self.tokens.load() else {
            self.commit(AuthState::signed_out());
            return;
        };

        let result = self.api.current_user(&token).await;
        if self.generation() != started {
            leptos::logging::log!("session: dropping stale hydrate result");
            return;
        }

        match result {
            Ok(user) => self.commit(AuthState::signed_in(token, user)),
            Err(e) => {
                if e.is_auth() {
                    leptos::logging::warn!("session: stored token rejected: {e}");
                } else {
                    leptos::logging::warn!("session: could not verify stored token: {e}");
                }
                self.tokens.clear();
                self.commit(AuthState::signed_out());
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` from the credential exchange; state is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthState, ApiError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = self.api.login(&request).await?;
        Ok(self.establish(resp))
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` from the register call; state is unchanged.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<AuthState, ApiError> {
        let request = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            user_type,
        };
        let resp = self.api.register(&request).await?;
        Ok(self.establish(resp))
    }

    /// Forget the session. Idempotent and infallible.
    pub fn logout(&self) {
        self.tokens.clear();
        self.commit(AuthState::signed_out());
    }

    fn establish(&self, resp: AuthResponse) -> AuthState {
        let AuthResponse { token, user } = resp;
        self.tokens.save(&token);
        let next = AuthState::signed_in(token, user);
        self.commit(next.clone());
        next
    }
}
