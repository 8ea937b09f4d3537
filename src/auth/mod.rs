//! Authentication and two-factor verification flow.
//!
//! Provides:
//! - Wire models shared with the clinic backend ([`models`])
//! - The opaque backend collaborator trait and its REST implementation
//!   ([`backend`])
//! - The primary login state machine ([`AuthService`])
//! - The two-factor challenge step machine ([`TwoFactorChallenge`])
//!
//! ## Design Decisions
//! - All user-visible text routes through the localization manager; no
//!   message is hardcoded at a failure site.
//! - Two-factor verification is the original console's placeholder logic
//!   (fixed sentinel code, fail-open on the third attempt), preserved
//!   verbatim pending product clarification — see DESIGN.md.

pub mod backend;
pub mod error;
pub mod models;
pub mod service;
pub mod two_factor;

pub use backend::{AuthBackend, HttpAuthBackend};
pub use error::AuthError;
pub use models::{Credentials, ProfileUpdate, SessionPayload, UserRecord, UserRole};
pub use service::{AuthService, AuthState, LoginOutcome, StatusMessage};
pub use two_factor::{
    TwoFactorChallenge, TwoFactorMethod, TwoFactorStep, VerifyOutcome, VERIFICATION_SENTINEL,
};
