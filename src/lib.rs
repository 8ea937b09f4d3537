//! Client-side core for the HakimClinic administrative console.
//!
//! This crate implements the non-visual half of the console: the
//! authentication lifecycle (login, logout, token refresh, two-factor
//! verification), the two-scope credential store that backs it, and the
//! localization manager every user-facing message routes through.
//!
//! The UI layer is an external consumer: it renders forms, subscribes to
//! language changes, and displays the [`auth::StatusMessage`]s produced
//! here. Nothing in this crate writes to a terminal or a screen.
//!
//! ## Composition
//!
//! Services are explicit instances wired together once at startup (see
//! [`app::AppContext`]), not process globals. A typical embedding:
//!
//! ```no_run
//! use hakim_core::app::AppContext;
//! use hakim_core::config::AppConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = AppContext::init(AppConfig::default())?;
//! assert!(!ctx.sessions.is_authenticated());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod auth;
pub mod config;
pub mod i18n;
pub mod session;
pub mod storage;
pub mod validation;
