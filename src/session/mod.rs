//! Session persistence across the two storage scopes.
//!
//! The session store is the single source of truth for "is there a
//! logged-in user". Credentials live redundantly in a durable scope
//! (survives restarts) and, for non-remembered logins, an ephemeral
//! scope as well. Reads treat the pair as a two-tier cache: the
//! ephemeral scope wins when it holds a value, else the durable scope
//! answers.
//!
//! Write placement preserves the console's historical behavior: tokens
//! and the user record always land in the durable scope, and a
//! `remember_me = false` login *additionally* mirrors the access token
//! and user record into the ephemeral scope. The durable copy of a
//! non-remembered session is a known inconsistency (see DESIGN.md);
//! [`clear_session`](SessionStore::clear_session) therefore wipes both
//! scopes unconditionally so a stale session can never resurrect.

use anyhow::Result;
use std::sync::Arc;

use crate::auth::backend::AuthBackend;
use crate::auth::error::AuthError;
use crate::auth::models::UserRecord;
use crate::storage::{keys, StorageScope};

/// An authenticated session as committed after login.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserRecord,
}

/// Two-scope persistence for authentication state.
pub struct SessionStore {
    durable: Arc<StorageScope>,
    ephemeral: Arc<StorageScope>,
}

impl SessionStore {
    pub fn new(durable: Arc<StorageScope>, ephemeral: Arc<StorageScope>) -> Self {
        Self { durable, ephemeral }
    }

    /// Read a key with ephemeral-first precedence. Read failures are
    /// logged and treated as absence; availability wins over strictness
    /// on this path.
    fn read(&self, key: &str) -> Option<String> {
        for scope in [&self.ephemeral, &self.durable] {
            match scope.get(key) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => {}
                Err(err) => tracing::warn!(key = key, error = %err, "storage read failed"),
            }
        }
        None
    }

    /// True iff an access token exists in either scope. Pure predicate.
    pub fn is_authenticated(&self) -> bool {
        self.read(keys::AUTH_TOKEN).is_some()
    }

    /// Access token from whichever scope holds one.
    pub fn access_token(&self) -> Option<String> {
        self.read(keys::AUTH_TOKEN)
    }

    /// The cached user record, or `None` when absent or unreadable.
    /// A malformed record is logged and treated as "no cached user".
    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = self.read(keys::USER_DATA)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "cached user record is malformed, ignoring");
                None
            }
        }
    }

    /// Persist a freshly authenticated session.
    ///
    /// Storage write failures propagate; a partially written session is
    /// possible on failure and is recovered by the next `clear_session`.
    pub fn commit_session(&self, session: &Session, remember_me: bool) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;

        self.durable.set(keys::AUTH_TOKEN, &session.access_token)?;
        self.durable.set(keys::REFRESH_TOKEN, &session.refresh_token)?;
        self.durable.set(keys::USER_DATA, &user_json)?;

        if remember_me {
            self.durable.set(keys::REMEMBER_ME, "true")?;
        } else {
            self.durable.remove(keys::REMEMBER_ME)?;
            self.ephemeral.set(keys::AUTH_TOKEN, &session.access_token)?;
            self.ephemeral.set(keys::USER_DATA, &user_json)?;
        }
        Ok(())
    }

    /// Replace the cached user record (profile updates).
    pub fn store_user(&self, user: &UserRecord) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        self.durable.set(keys::USER_DATA, &user_json)?;
        if self.ephemeral.get(keys::USER_DATA)?.is_some() {
            self.ephemeral.set(keys::USER_DATA, &user_json)?;
        }
        Ok(())
    }

    /// Remove every session key from both scopes. Idempotent; safe to
    /// call with no session present.
    pub fn clear_session(&self) -> Result<()> {
        for scope in [&self.durable, &self.ephemeral] {
            scope.remove(keys::AUTH_TOKEN)?;
            scope.remove(keys::REFRESH_TOKEN)?;
            scope.remove(keys::USER_DATA)?;
            scope.remove(keys::REMEMBER_ME)?;
        }
        Ok(())
    }

    /// Exchange the stored refresh token for a new token pair.
    ///
    /// Any failure — no refresh token, backend rejection, network error
    /// — clears the entire session and propagates: a failed refresh
    /// means the session is unrecoverable, not worth retrying.
    pub async fn refresh_access_token(
        &self,
        backend: &dyn AuthBackend,
    ) -> Result<String, AuthError> {
        let Some(refresh_token) = self.durable.get(keys::REFRESH_TOKEN)? else {
            tracing::warn!("refresh attempted without a stored refresh token");
            self.clear_session()?;
            return Err(AuthError::NoRefreshToken);
        };

        let payload = match backend.refresh(&refresh_token).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed, clearing session");
                self.clear_session()?;
                return Err(err);
            }
        };

        self.durable.set(keys::AUTH_TOKEN, &payload.token)?;
        self.durable.set(keys::REFRESH_TOKEN, &payload.refresh_token)?;
        // Keep a mirrored ephemeral token in step with its scope.
        if self.ephemeral.get(keys::AUTH_TOKEN)?.is_some() {
            self.ephemeral.set(keys::AUTH_TOKEN, &payload.token)?;
        }
        Ok(payload.token)
    }
}
