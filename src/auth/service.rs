//! Authentication flow orchestration.
//!
//! Coordinates the login sequence against the backend collaborator,
//! persists outcomes through the session store, and translates every
//! user-visible result through the localization manager so no message
//! text is hardcoded at the point of failure.
//!
//! Primary state machine:
//!
//! ```text
//! Idle ──login──▸ Authenticating ──success──▸ Authenticated
//!   ▴                   │    └──two-factor required──▸ (challenge gates commit)
//!   └──logout──         └──failure──▸ Failed
//! ```
//!
//! Overlapping logins are not supported: the caller is expected to
//! disable the submit action while a login is in flight (an overlap is
//! logged, not queued or cancelled).

use parking_lot::Mutex;
use std::sync::Arc;

use super::backend::AuthBackend;
use super::error::AuthError;
use super::models::{Credentials, ProfileUpdate, UserRecord};
use super::two_factor::{TwoFactorChallenge, TwoFactorStep};
use crate::i18n::I18nManager;
use crate::session::{Session, SessionStore};

/// Primary login state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    Authenticating,
    Authenticated,
    Failed,
}

/// A localized, display-ready outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: String,
    pub body: String,
}

/// Result of a successful `login` call.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Session committed; the operator is in.
    LoggedIn {
        user: UserRecord,
        message: StatusMessage,
    },
    /// The backend demands a second factor. The session payload is
    /// parked; call [`AuthService::complete_two_factor`] once the
    /// challenge reaches `Success`.
    TwoFactorRequired { challenge: TwoFactorChallenge },
}

/// A session payload held back until two-factor verification completes.
struct PendingLogin {
    session: Session,
    remember_me: bool,
}

/// Orchestrates login, logout, refresh, and the two-factor gate.
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    sessions: Arc<SessionStore>,
    i18n: Arc<I18nManager>,
    state: Mutex<AuthState>,
    pending: Mutex<Option<PendingLogin>>,
}

impl AuthService {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        sessions: Arc<SessionStore>,
        i18n: Arc<I18nManager>,
    ) -> Self {
        Self {
            backend,
            sessions,
            i18n,
            state: Mutex::new(AuthState::Idle),
            pending: Mutex::new(None),
        }
    }

    /// Current primary-flow state.
    pub fn state(&self) -> AuthState {
        *self.state.lock()
    }

    /// Submit credentials to the backend.
    ///
    /// On success the session is committed (or parked behind a
    /// two-factor challenge) and a localized success message returned.
    /// On failure no session is committed and the error is re-raised so
    /// the caller can keep the form open; use
    /// [`describe_error`](Self::describe_error) for the display text.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, AuthError> {
        {
            let mut state = self.state.lock();
            if *state == AuthState::Authenticating {
                tracing::warn!("login called while another attempt is in flight");
            }
            *state = AuthState::Authenticating;
        }

        let payload = match self.backend.login(&credentials).await {
            Ok(payload) => payload,
            Err(err) => {
                *self.state.lock() = AuthState::Failed;
                tracing::warn!(error = %err, username = %credentials.username, "login failed");
                return Err(err);
            }
        };
        // The password is dropped with `credentials`; only tokens and
        // the user record survive past this point.
        let session = Session {
            access_token: payload.token,
            refresh_token: payload.refresh_token,
            user: payload.user,
        };

        if payload.two_factor_required {
            tracing::info!(username = %session.user.username, "two-factor required, parking session");
            *self.pending.lock() = Some(PendingLogin {
                session,
                remember_me: credentials.remember_me,
            });
            return Ok(LoginOutcome::TwoFactorRequired {
                challenge: TwoFactorChallenge::new(self.i18n.clone()),
            });
        }

        self.finalize(session, credentials.remember_me)
    }

    /// Finalize a login that was parked behind a two-factor challenge.
    ///
    /// The challenge must have reached `Success` (the method and code
    /// that cleared it are recorded on the challenge itself).
    pub fn complete_two_factor(
        &self,
        challenge: &TwoFactorChallenge,
    ) -> Result<LoginOutcome, AuthError> {
        if challenge.step() != TwoFactorStep::Success {
            return Err(AuthError::TwoFactorPending);
        }
        let pending = self.pending.lock().take().ok_or(AuthError::NoPendingLogin)?;
        self.finalize(pending.session, pending.remember_me)
    }

    fn finalize(&self, session: Session, remember_me: bool) -> Result<LoginOutcome, AuthError> {
        if let Err(err) = self.sessions.commit_session(&session, remember_me) {
            *self.state.lock() = AuthState::Failed;
            return Err(err.into());
        }
        *self.state.lock() = AuthState::Authenticated;
        tracing::info!(username = %session.user.username, "login succeeded");
        Ok(LoginOutcome::LoggedIn {
            user: session.user,
            message: self.success_message("auth.loginSuccess"),
        })
    }

    /// Log out. The backend call is best-effort (failure is logged);
    /// local session state is cleared regardless, and the flow returns
    /// to `Idle`.
    pub async fn logout(&self) -> Result<StatusMessage, AuthError> {
        let token = self.sessions.access_token();
        if let Err(err) = self.backend.logout(token.as_deref()).await {
            tracing::warn!(error = %err, "logout API call failed; clearing local session anyway");
        }

        let cleared = self.sessions.clear_session();
        *self.state.lock() = AuthState::Idle;
        *self.pending.lock() = None;
        cleared?;

        Ok(self.success_message("auth.logoutSuccess"))
    }

    /// Request a password-reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<StatusMessage, AuthError> {
        self.backend.forgot_password(email).await?;
        Ok(self.success_message("auth.resetEmailSent"))
    }

    /// Complete a password reset with the emailed token.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<StatusMessage, AuthError> {
        self.backend.reset_password(token, new_password).await?;
        Ok(self.success_message("auth.passwordResetSuccess"))
    }

    /// Update the operator's profile and refresh the cached user record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserRecord, AuthError> {
        let token = self.sessions.access_token().ok_or(AuthError::NotAuthenticated)?;
        let user = self.backend.update_profile(&token, update).await?;
        self.sessions.store_user(&user)?;
        Ok(user)
    }

    /// Render an error as a localized status message. Backend-supplied
    /// messages pass through verbatim; everything else maps to a
    /// catalog entry.
    pub fn describe_error(&self, err: &AuthError) -> StatusMessage {
        let body = match err {
            AuthError::Backend { message } => message.clone(),
            AuthError::Network { .. } => self.i18n.translate("errors.networkError"),
            AuthError::NoRefreshToken => self.i18n.translate("auth.sessionExpired"),
            AuthError::NotAuthenticated => self.i18n.translate("errors.unauthorized"),
            AuthError::TwoFactorPending | AuthError::NoPendingLogin => {
                self.i18n.translate("auth.loginError")
            }
            AuthError::Storage(_) => self.i18n.translate("errors.unknownError"),
        };
        StatusMessage {
            title: self.i18n.translate("common.error"),
            body,
        }
    }

    fn success_message(&self, key: &str) -> StatusMessage {
        StatusMessage {
            title: self.i18n.translate("common.success"),
            body: self.i18n.translate(key),
        }
    }
}
