//! Application composition root.
//!
//! Wires the storage scopes, localization manager, session store, and
//! authentication service together once at startup. Embedders hold an
//! [`AppContext`] and hand the `Arc`ed services to whichever layer needs
//! them; nothing in the crate reaches for a process global.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::auth::{AuthService, HttpAuthBackend};
use crate::config::AppConfig;
use crate::i18n::I18nManager;
use crate::session::SessionStore;
use crate::storage::StorageScope;
use crate::validation::Validator;

/// The wired-up service graph for one console instance.
pub struct AppContext {
    pub config: AppConfig,
    pub i18n: Arc<I18nManager>,
    pub sessions: Arc<SessionStore>,
    pub auth: Arc<AuthService>,
    pub validator: Validator,
}

impl AppContext {
    /// Build the full service graph from a config.
    ///
    /// Opens (or creates) the durable store under the configured data
    /// directory and a fresh ephemeral scope; restores the persisted
    /// language preference.
    pub fn init(config: AppConfig) -> Result<Self> {
        let store_path = config.store_path();
        let durable = Arc::new(
            StorageScope::open(&store_path)
                .with_context(|| format!("opening store at {}", store_path.display()))?,
        );
        let ephemeral = Arc::new(StorageScope::in_memory()?);

        let i18n = Arc::new(I18nManager::new(durable.clone(), &config.default_language));
        let sessions = Arc::new(SessionStore::new(durable, ephemeral));
        let backend = Arc::new(HttpAuthBackend::new(&config)?);
        let auth = Arc::new(AuthService::new(
            backend,
            sessions.clone(),
            i18n.clone(),
        ));
        let validator = Validator::new(i18n.clone());

        tracing::info!(
            language = i18n.current_language(),
            api = %config.api_base_url,
            "application context initialized"
        );
        Ok(Self {
            config,
            i18n,
            sessions,
            auth,
            validator,
        })
    }
}
