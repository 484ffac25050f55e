//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of session state. Route guards and user-aware components
//! read it through [`AuthStore`] to coordinate login redirects and
//! identity-dependent rendering.
//!
//! DESIGN
//! ======
//! [`AuthState`] carries explicit transition methods instead of free-form
//! field writes, preserving two invariants: `is_authenticated` holds exactly
//! when both `user` and `token` are present, and `is_loading` is set only
//! while an auth operation is in flight. Overlapping operations are not
//! de-duplicated; the last response to land wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Credentials, RegisterPayload, User, UserPatch};
use crate::util::storage;

/// Session state tracking the current user, token, and operation status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// An auth operation has started. Identity fields are retained so a
    /// re-login from an authenticated state does not flicker to logged-out.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// An auth operation succeeded; the session is replaced wholesale.
    pub fn succeed(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.is_loading = false;
        self.error = None;
    }

    /// An auth operation failed; the session settles unauthenticated.
    /// `error` is `None` for expected failures (expired persisted session).
    pub fn fail(&mut self, error: Option<String>) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = error;
    }

    /// Logout or forced expiry: back to the empty settled state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Shallow-merge a patch into the current user. A no-op (not an error)
    /// when the session is not authenticated.
    pub fn merge_user(&mut self, patch: &UserPatch) {
        if !self.is_authenticated {
            return;
        }
        if let Some(user) = self.user.as_mut() {
            patch.apply(user);
        }
    }
}

/// Outcome of a successful registration call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// The account must verify its email before it can sign in.
    pub requires_verification: bool,
}

/// Copyable handle over the shared session signal, provided via context at
/// the app root.
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive read of the current session state.
    pub fn get(self) -> AuthState {
        self.state.get()
    }

    /// Restore the session from the persisted token, once at startup.
    ///
    /// An invalid or expired persisted token is expected, not a user-facing
    /// error: the token is dropped and the session settles unauthenticated
    /// quietly.
    pub async fn initialize(self) {
        let Some(token) = storage::load_token() else {
            self.state.update(|state| state.fail(None));
            return;
        };
        self.state.update(AuthState::begin);
        match api::current_user().await {
            Ok(user) => self.state.update(|state| state.succeed(user, token)),
            Err(err) => {
                log::debug!("session restore failed: {err}");
                storage::clear_token();
                self.state.update(|state| state.fail(None));
            }
        }
    }

    /// Sign in. On success the token is persisted and the session becomes
    /// authenticated; on failure the session settles unauthenticated with
    /// `error` set and the message is returned for inline form display.
    pub async fn login(self, credentials: Credentials) -> Result<(), String> {
        self.state.update(AuthState::begin);
        match api::login(&credentials).await {
            Ok(response) => {
                storage::save_token(&response.token);
                self.state
                    .update(|state| state.succeed(response.user, response.token));
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("login failed: {message}");
                self.state.update(|state| state.fail(Some(message.clone())));
                Err(message)
            }
        }
    }

    /// Create an account. Same contract as [`AuthStore::login`], except the
    /// outcome reports whether the caller should branch to the
    /// verify-your-email flow instead of the signed-in portal.
    pub async fn register(self, payload: RegisterPayload) -> Result<RegisterOutcome, String> {
        self.state.update(AuthState::begin);
        match api::register(&payload).await {
            Ok(response) => {
                let requires_verification = response.requires_verification;
                if let (Some(token), Some(user)) = (response.token, response.user) {
                    storage::save_token(&token);
                    self.state.update(|state| state.succeed(user, token));
                    Ok(RegisterOutcome {
                        requires_verification,
                    })
                } else {
                    // No token means the backend is holding the account
                    // until the email is verified.
                    self.state.update(|state| state.fail(None));
                    Ok(RegisterOutcome {
                        requires_verification: true,
                    })
                }
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("registration failed: {message}");
                self.state.update(|state| state.fail(Some(message.clone())));
                Err(message)
            }
        }
    }

    /// Sign out. Synchronous: drops the persisted token and resets the
    /// session without a network call.
    pub fn logout(self) {
        storage::clear_token();
        self.state.update(AuthState::reset);
    }

    /// Merge a partial update into the current user. Silently a no-op when
    /// not authenticated.
    pub fn update_user(self, patch: &UserPatch) {
        self.state.update(|state| state.merge_user(patch));
    }
}
