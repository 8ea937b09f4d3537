//! Localization manager for the console.
//!
//! Holds per-language string tables, resolves dotted key paths, tracks
//! the active language (persisting the choice to the durable scope), and
//! broadcasts changes to subscribers. Consumers receive an explicit
//! [`I18nManager`] reference from the composition root instead of going
//! through a process global, and listen on a [`subscribe`](I18nManager::subscribe)
//! channel instead of a window-level event bus.
//!
//! Lookup never fails: an unregistered key path is echoed back unchanged
//! so a missing translation degrades to a raw key in the UI rather than
//! a crash.

mod locales;

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::{Arc, LazyLock};

use crate::storage::{keys, StorageScope};

/// Buffered language-change events per subscriber.
const EVENT_CHANNEL_CAPACITY: usize = 16;

static ARABIC: LazyLock<Value> = LazyLock::new(locales::arabic);
static ENGLISH: LazyLock<Value> = LazyLock::new(locales::english);

/// Horizontal text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// The value used for a document `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// ISO 639-1 code ("ar", "en").
    pub code: &'static str,
    /// Display name in the language itself.
    pub name: &'static str,
    pub direction: TextDirection,
}

/// Languages available in the console, default first.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        code: "ar",
        name: "العربية",
        direction: TextDirection::Rtl,
    },
    LanguageDescriptor {
        code: "en",
        name: "English",
        direction: TextDirection::Ltr,
    },
];

/// Event broadcast to subscribers whenever the active language changes.
#[derive(Debug, Clone)]
pub struct LanguageChanged {
    pub code: String,
    pub direction: TextDirection,
}

fn descriptor(code: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

fn table(code: &str) -> Option<&'static Value> {
    match code {
        "ar" => Some(&ARABIC),
        "en" => Some(&ENGLISH),
        _ => None,
    }
}

/// Walk a dotted key path through a nested table.
/// Returns `None` if any segment is missing or the terminal value is not
/// a string.
fn resolve<'a>(table: &'a Value, key_path: &str) -> Option<&'a str> {
    let mut node = table;
    for segment in key_path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

/// Tracks the active language and resolves UI strings for it.
///
/// Exactly one language is active at any time. The manager is cheap to
/// share behind an `Arc`; all methods take `&self`.
pub struct I18nManager {
    durable: Arc<StorageScope>,
    current: Mutex<&'static LanguageDescriptor>,
    events: tokio::sync::broadcast::Sender<LanguageChanged>,
}

impl I18nManager {
    /// Build a manager, restoring the persisted language preference or
    /// falling back to `default_language` (and ultimately to the first
    /// registered language if the configured default is unknown).
    pub fn new(durable: Arc<StorageScope>, default_language: &str) -> Self {
        let saved = durable.get(keys::LANGUAGE).ok().flatten();
        let initial = saved
            .as_deref()
            .and_then(descriptor)
            .or_else(|| descriptor(default_language))
            .unwrap_or(&LANGUAGES[0]);

        let (events, _) = tokio::sync::broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            durable,
            current: Mutex::new(initial),
            events,
        }
    }

    /// Resolve a dotted key path against the active table.
    ///
    /// Unregistered paths are returned unchanged; the miss is logged so
    /// leaked raw keys can be traced back to the catalog.
    pub fn translate(&self, key_path: &str) -> String {
        let lang = *self.current.lock();
        match table(lang.code).and_then(|t| resolve(t, key_path)) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key_path = key_path, language = lang.code, "translation key not found");
                key_path.to_string()
            }
        }
    }

    /// Switch the active language.
    ///
    /// Codes with no registered table are ignored so an invalid code can
    /// never corrupt the current state. On success the choice is
    /// persisted to the durable scope and a [`LanguageChanged`] event is
    /// broadcast. Calling this twice with the same code is idempotent
    /// (the second call re-persists and re-notifies, harmlessly).
    pub fn change_language(&self, code: &str) {
        let Some(lang) = descriptor(code).filter(|l| table(l.code).is_some()) else {
            tracing::warn!(code = code, "ignoring change to unregistered language");
            return;
        };

        *self.current.lock() = lang;
        if let Err(err) = self.durable.set(keys::LANGUAGE, lang.code) {
            tracing::warn!(error = %err, "failed to persist language preference");
        }

        let _ = self.events.send(LanguageChanged {
            code: lang.code.to_string(),
            direction: lang.direction,
        });
    }

    /// Code of the active language.
    pub fn current_language(&self) -> &'static str {
        self.current.lock().code
    }

    /// Descriptor of the active language.
    pub fn current_language_info(&self) -> &'static LanguageDescriptor {
        *self.current.lock()
    }

    /// Text direction of the active language.
    pub fn direction(&self) -> TextDirection {
        self.current.lock().direction
    }

    /// Whether the active language reads right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Subscribe to language-change events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<LanguageChanged> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_default(default: &str) -> (Arc<StorageScope>, I18nManager) {
        let durable = Arc::new(StorageScope::in_memory().unwrap());
        let manager = I18nManager::new(durable.clone(), default);
        (durable, manager)
    }

    #[test]
    fn translate_resolves_registered_paths() {
        let (_store, manager) = manager_with_default("ar");
        assert_eq!(manager.translate("auth.loginSuccess"), "تم تسجيل الدخول بنجاح");
        assert_eq!(manager.translate("common.success"), "نجح");
    }

    #[test]
    fn translate_echoes_unregistered_paths() {
        let (_store, manager) = manager_with_default("ar");
        assert_eq!(manager.translate("auth.noSuchKey"), "auth.noSuchKey");
        assert_eq!(manager.translate("bogus"), "bogus");
        // A non-string terminal (a whole section) also degrades to the key.
        assert_eq!(manager.translate("auth"), "auth");
        assert_eq!(manager.translate("twoFactor.methods"), "twoFactor.methods");
    }

    #[test]
    fn change_language_swaps_table_and_persists() {
        let (store, manager) = manager_with_default("ar");
        assert!(manager.is_rtl());

        manager.change_language("en");
        assert_eq!(manager.current_language(), "en");
        assert!(!manager.is_rtl());
        assert_eq!(manager.translate("auth.loginSuccess"), "Login successful");
        assert_eq!(
            store.get(keys::LANGUAGE).unwrap(),
            Some("en".to_string())
        );
    }

    #[test]
    fn change_language_is_idempotent() {
        let (store, manager) = manager_with_default("ar");

        manager.change_language("en");
        let first = (
            manager.current_language(),
            manager.is_rtl(),
            store.get(keys::LANGUAGE).unwrap(),
        );
        manager.change_language("en");
        let second = (
            manager.current_language(),
            manager.is_rtl(),
            store.get(keys::LANGUAGE).unwrap(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_code_is_ignored() {
        let (store, manager) = manager_with_default("ar");

        manager.change_language("fr");
        assert_eq!(manager.current_language(), "ar");
        assert!(manager.is_rtl());
        assert_eq!(store.get(keys::LANGUAGE).unwrap(), None);
    }

    #[test]
    fn saved_preference_wins_over_default() {
        let durable = Arc::new(StorageScope::in_memory().unwrap());
        durable.set(keys::LANGUAGE, "en").unwrap();

        let manager = I18nManager::new(durable, "ar");
        assert_eq!(manager.current_language(), "en");
    }

    #[test]
    fn unknown_default_falls_back_to_first_language() {
        let (_store, manager) = manager_with_default("xx");
        assert_eq!(manager.current_language(), "ar");
    }

    #[tokio::test]
    async fn subscribers_are_notified_on_change() {
        let (_store, manager) = manager_with_default("ar");
        let mut rx = manager.subscribe();

        manager.change_language("en");
        let event = rx.recv().await.unwrap();
        assert_eq!(event.code, "en");
        assert_eq!(event.direction, TextDirection::Ltr);
    }

    #[test]
    fn every_arabic_key_exists_in_english() {
        fn walk(prefix: &str, node: &Value, missing: &mut Vec<String>, other: &Value) {
            if let Some(map) = node.as_object() {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(&path, child, missing, other);
                }
            } else if resolve(other, prefix).is_none() {
                missing.push(prefix.to_string());
            }
        }

        let mut missing = Vec::new();
        walk("", &ARABIC, &mut missing, &ENGLISH);
        assert!(missing.is_empty(), "keys missing from english: {missing:?}");
    }
}
