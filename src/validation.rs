//! Form field validation with localized failure messages.
//!
//! Mirrors the console's client-side checks: every rule except
//! `Required` treats an empty value as valid so that optional fields
//! pass untouched and `Required` alone decides presence. Failure
//! messages come from the `validation.*` catalog section, so the caller
//! never hardcodes text.

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::i18n::I18nManager;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const NATIONAL_ID_LENGTH: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s()]+$").unwrap());
static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Outcome of a single rule applied to a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Localized failure message; `None` when valid.
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn fail(message: String) -> Self {
        Self {
            is_valid: false,
            message: Some(message),
        }
    }
}

/// A single field rule. Length bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Phone,
    /// At least [`PASSWORD_MIN_LENGTH`] characters.
    Password,
    /// At least [`USERNAME_MIN_LENGTH`] characters.
    Username,
    /// Exactly [`NATIONAL_ID_LENGTH`] digits.
    NationalId,
    /// Parses as a decimal number.
    Number,
    MinLength(usize),
    MaxLength(usize),
}

/// Applies rules and localizes their failure messages.
pub struct Validator {
    i18n: Arc<I18nManager>,
}

impl Validator {
    pub fn new(i18n: Arc<I18nManager>) -> Self {
        Self { i18n }
    }

    /// Apply one rule to a value.
    pub fn check(&self, rule: Rule, value: &str) -> ValidationResult {
        // Optional-field convention: only Required rejects emptiness.
        if value.is_empty() && rule != Rule::Required {
            return ValidationResult::ok();
        }
        let valid = match rule {
            Rule::Required => !value.is_empty(),
            Rule::Email => EMAIL_PATTERN.is_match(value),
            Rule::Phone => PHONE_PATTERN.is_match(value),
            Rule::Password => value.chars().count() >= PASSWORD_MIN_LENGTH,
            Rule::Username => value.chars().count() >= USERNAME_MIN_LENGTH,
            Rule::NationalId => {
                value.chars().count() == NATIONAL_ID_LENGTH && DIGITS_PATTERN.is_match(value)
            }
            Rule::Number => value.parse::<f64>().is_ok(),
            Rule::MinLength(min) => value.chars().count() >= min,
            Rule::MaxLength(max) => value.chars().count() <= max,
        };
        if valid {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(self.i18n.translate(message_key(rule)))
        }
    }

    /// Apply rules in order; the first failure wins.
    pub fn validate_field(&self, value: &str, rules: &[Rule]) -> ValidationResult {
        for &rule in rules {
            let result = self.check(rule, value);
            if !result.is_valid {
                return result;
            }
        }
        ValidationResult::ok()
    }
}

fn message_key(rule: Rule) -> &'static str {
    match rule {
        Rule::Required => "validation.required",
        Rule::Email => "validation.invalidEmail",
        Rule::Phone => "validation.invalidPhone",
        Rule::Password => "validation.passwordTooShort",
        Rule::Username | Rule::MinLength(_) => "validation.minLength",
        Rule::NationalId | Rule::Number => "validation.invalidNumber",
        Rule::MaxLength(_) => "validation.maxLength",
    }
}
