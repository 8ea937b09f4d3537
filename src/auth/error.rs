//! Error taxonomy for the authentication flow.

use thiserror::Error;

/// Failures surfaced by the authentication flow and session store.
///
/// `Backend` carries the backend's own `message` field verbatim so the
/// caller can display it; every other variant is mapped to a catalog
/// string by [`AuthService::describe_error`](super::AuthService::describe_error)
/// before reaching the user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend answered with `success: false` or a non-2xx status.
    #[error("{message}")]
    Backend { message: String },

    /// The request never produced a usable response (connect failure,
    /// timeout, malformed body).
    #[error("network error: {message}")]
    Network { message: String },

    /// A refresh was attempted without a stored refresh token.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// An operation requiring a session was called while logged out.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Two-factor completion was requested before the challenge succeeded.
    #[error("two-factor verification is still pending")]
    TwoFactorPending,

    /// Two-factor completion was requested with no login awaiting it.
    #[error("no login is awaiting two-factor completion")]
    NoPendingLogin,

    /// A local storage read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
