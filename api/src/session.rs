//! # Session — who is the current user
//!
//! [`Session`] is the single source of truth for the authenticated user's
//! profile. It is an explicit value created at app start and passed to
//! whatever needs it (a constructor-injected handle, never a global), cheap
//! to clone like the stores in the `store` crate.
//!
//! ## Lifecycle
//!
//! ```text
//! Unauthenticated ──resolve()──▶ Resolving ──fetch ok──▶ Authenticated
//!        ▲                          │
//!        │                          └──fetch err──▶ Degraded (token kept)
//!        └───────────── logout() ◀── Authenticated / Degraded
//! ```
//!
//! A profile-fetch failure does **not** imply the credential is bad (the
//! server may be unreachable), so `Degraded` retains the stored token and a
//! later [`resolve`](Session::resolve) can recover.
//!
//! Overlapping [`resolve`](Session::resolve) calls are not fenced: the last
//! fetch to complete wins. The app drives at most one resolve at a time in
//! practice.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use store::TokenStore;

use crate::claims;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserProfile;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No credential, no profile. App start and after logout.
    #[default]
    Unauthenticated,
    /// Credential decoded, profile fetch in flight.
    Resolving,
    /// Credential present, profile populated.
    Authenticated,
    /// Credential present but the profile fetch failed.
    Degraded,
}

#[derive(Debug, Default)]
struct SessionInner {
    user: Option<UserProfile>,
    state: SessionState,
}

/// Cloneable handle to the current user's profile and lifecycle state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.inner.lock().unwrap().state
    }

    /// Snapshot of the current profile.
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.lock().unwrap().user.clone()
    }

    /// Replace the entire profile snapshot. `None` denotes logout.
    ///
    /// Always a full replacement, never a field merge — anything derived from
    /// the profile (display name) is computed from the new snapshot only.
    pub fn set_user(&self, user: Option<UserProfile>) {
        let mut inner = self.inner.lock().unwrap();
        inner.state = if user.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };
        inner.user = user;
    }

    /// Bridge credential possession to profile data: read the stored token,
    /// decode its subject, and fetch the matching profile.
    ///
    /// On fetch failure the session enters [`SessionState::Degraded`] and the
    /// token is retained — a profile-fetch failure is not treated as an auth
    /// failure.
    pub async fn resolve<S: TokenStore>(
        &self,
        client: &ApiClient<S>,
    ) -> Result<UserProfile, ApiError> {
        let Some(token) = client.token_store().get_token().await? else {
            return Err(ApiError::MissingToken);
        };
        let claims = claims::decode(&token)?;
        debug!(subject = %claims.subject, "resolving session");

        self.inner.lock().unwrap().state = SessionState::Resolving;

        match client.fetch_user(&claims.subject).await {
            Ok(profile) => {
                let mut inner = self.inner.lock().unwrap();
                inner.user = Some(profile.clone());
                inner.state = SessionState::Authenticated;
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "profile fetch failed, session degraded");
                let mut inner = self.inner.lock().unwrap();
                inner.user = None;
                inner.state = SessionState::Degraded;
                Err(err)
            }
        }
    }

    /// End the session: clear the stored credential and the in-memory
    /// profile. One user-facing action, even though the storage clear and the
    /// state reset are separate calls underneath.
    pub async fn logout<S: TokenStore>(&self, client: &ApiClient<S>) -> Result<(), ApiError> {
        client.logout().await?;
        self.set_user(None);
        Ok(())
    }
}
