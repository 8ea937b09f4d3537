//! Two-factor verification challenge.
//!
//! A [`TwoFactorChallenge`] is an ephemeral step machine created when a
//! login requires a second factor and discarded once it completes (or
//! the operator navigates away). Steps:
//!
//! ```text
//! MethodSelection ──select_method──▸ CodeVerification ──submit_code──▸ Success
//!        ▴                                │  │
//!        └────────── change_method ───────┘  └── retry (wrong code)
//! ```
//!
//! Code dispatch and verification are simulated with fixed delays; the
//! accepted code is a fixed sentinel, and after two failed attempts the
//! third submission succeeds regardless (fail-open). Both behaviors are
//! placeholders for real OTP validation and are preserved deliberately —
//! see DESIGN.md before "hardening" either one.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::StatusMessage;
use crate::i18n::I18nManager;

/// Placeholder code accepted as valid in lieu of real OTP validation.
pub const VERIFICATION_SENTINEL: &str = "123456";

/// Expected verification code length.
pub const CODE_LENGTH: usize = 6;

/// Total submissions before the fail-open rule admits the operator.
pub const MAX_ATTEMPTS: u32 = 3;

/// Resend cooldown after a code is dispatched (seconds).
pub const RESEND_COOLDOWN_SECS: u32 = 120;

/// Simulated delay for dispatching a code.
const DISPATCH_DELAY: Duration = Duration::from_millis(1500);

/// Simulated delay for verifying a submitted code.
const VERIFY_DELAY: Duration = Duration::from_millis(1000);

/// Step of the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorStep {
    MethodSelection,
    CodeVerification,
    /// Reserved for the backup-code listing screen; the current flow
    /// never enters it (backup codes are verified like any other code).
    BackupCodes,
    Success,
}

/// How the verification code is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorMethod {
    Sms,
    Email,
    Authenticator,
    Backup,
}

impl TwoFactorMethod {
    /// Catalog key segment for this method.
    pub fn key(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
            Self::Authenticator => "authenticator",
            Self::Backup => "backup",
        }
    }

    /// Whether selecting this method dispatches a code (and therefore
    /// starts the resend countdown).
    fn sends_code(self) -> bool {
        matches!(self, Self::Sms | Self::Email)
    }
}

/// Result of a code submission.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// The challenge reached `Success`; the primary flow may finalize
    /// the session with the method and code that cleared it.
    Verified {
        method: TwoFactorMethod,
        code: String,
    },
    /// Wrong code. The input has been cleared; the message carries the
    /// localized remaining-attempts text.
    Rejected {
        remaining_attempts: u32,
        message: String,
    },
    /// Submission ignored: code shorter than [`CODE_LENGTH`], or the
    /// challenge is not at the verification step. No attempt consumed.
    Ignored,
}

/// Resend countdown: a watch channel decremented once per second by a
/// spawned task. Dropping the handle aborts the task, so a countdown can
/// never touch state after its owner is torn down.
#[derive(Debug)]
struct Countdown {
    seconds: tokio::sync::watch::Receiver<u32>,
    task: tokio::task::JoinHandle<()>,
}

impl Countdown {
    fn start(from_secs: u32) -> Self {
        let (tx, rx) = tokio::sync::watch::channel(from_secs);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await; // first tick completes immediately
            loop {
                interval.tick().await;
                let next = tx.borrow().saturating_sub(1);
                if tx.send(next).is_err() || next == 0 {
                    break;
                }
            }
        });
        Self { seconds: rx, task }
    }

    fn seconds(&self) -> u32 {
        *self.seconds.borrow()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Ephemeral two-factor challenge state.
///
/// Not persisted and not `Clone`: exactly one challenge gates a pending
/// login, and its countdown task dies with it.
pub struct TwoFactorChallenge {
    i18n: Arc<I18nManager>,
    step: TwoFactorStep,
    method: TwoFactorMethod,
    attempts: u32,
    code_input: String,
    countdown: Option<Countdown>,
    verified: Option<(TwoFactorMethod, String)>,
}

impl std::fmt::Debug for TwoFactorChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwoFactorChallenge")
            .field("step", &self.step)
            .field("method", &self.method)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}

impl TwoFactorChallenge {
    /// Start a challenge at method selection (SMS preselected, matching
    /// the console's default).
    pub fn new(i18n: Arc<I18nManager>) -> Self {
        Self {
            i18n,
            step: TwoFactorStep::MethodSelection,
            method: TwoFactorMethod::Sms,
            attempts: 0,
            code_input: String::new(),
            countdown: None,
            verified: None,
        }
    }

    /// Pick a delivery method and move to code verification.
    ///
    /// SMS and email simulate a code dispatch and start the 120-second
    /// resend countdown; authenticator and backup go straight to input.
    /// Returns the localized instruction for the verification screen.
    pub async fn select_method(&mut self, method: TwoFactorMethod) -> String {
        self.method = method;
        tokio::time::sleep(DISPATCH_DELAY).await;
        self.step = TwoFactorStep::CodeVerification;
        if method.sends_code() {
            self.countdown = Some(Countdown::start(RESEND_COOLDOWN_SECS));
        }
        tracing::info!(method = method.key(), "two-factor method selected");
        self.i18n.translate(match method {
            TwoFactorMethod::Sms => "twoFactor.codeSentSms",
            TwoFactorMethod::Email => "twoFactor.codeSentEmail",
            TwoFactorMethod::Authenticator => "twoFactor.useAuthenticator",
            TwoFactorMethod::Backup => "twoFactor.useBackup",
        })
    }

    /// Submit a verification code.
    ///
    /// Succeeds when the code matches [`VERIFICATION_SENTINEL`] or when
    /// two failed attempts were already recorded before this submission
    /// (so the third submission is admitted no matter what). The
    /// remaining-attempts counter can therefore read zero on the very
    /// submission that succeeds.
    pub async fn submit_code(&mut self, code: &str) -> VerifyOutcome {
        if self.step != TwoFactorStep::CodeVerification || code.chars().count() < CODE_LENGTH {
            return VerifyOutcome::Ignored;
        }

        self.code_input = code.to_string();
        tokio::time::sleep(VERIFY_DELAY).await;

        let prior_failures = self.attempts;
        self.attempts += 1;

        if code == VERIFICATION_SENTINEL || prior_failures >= MAX_ATTEMPTS - 1 {
            self.step = TwoFactorStep::Success;
            self.countdown = None;
            self.verified = Some((self.method, code.to_string()));
            tracing::info!(method = self.method.key(), attempts = self.attempts, "two-factor verified");
            VerifyOutcome::Verified {
                method: self.method,
                code: code.to_string(),
            }
        } else {
            self.code_input.clear();
            let remaining = MAX_ATTEMPTS.saturating_sub(self.attempts);
            VerifyOutcome::Rejected {
                remaining_attempts: remaining,
                message: self
                    .i18n
                    .translate("twoFactor.invalidCode")
                    .replace("{remaining}", &remaining.to_string()),
            }
        }
    }

    /// Go back to method selection. Cancels any running countdown and
    /// clears the input; the attempt count persists across methods.
    pub fn change_method(&mut self) {
        if self.step == TwoFactorStep::Success {
            return;
        }
        self.step = TwoFactorStep::MethodSelection;
        self.countdown = None;
        self.code_input.clear();
    }

    /// Request a new code. Only allowed for code-sending methods once
    /// the countdown has elapsed; restarts it on success.
    pub fn resend_code(&mut self) -> bool {
        if self.step != TwoFactorStep::CodeVerification || !self.method.sends_code() {
            return false;
        }
        if self.countdown.as_ref().is_some_and(|c| c.seconds() > 0) {
            return false;
        }
        self.countdown = Some(Countdown::start(RESEND_COOLDOWN_SECS));
        self.code_input.clear();
        true
    }

    pub fn step(&self) -> TwoFactorStep {
        self.step
    }

    pub fn method(&self) -> TwoFactorMethod {
        self.method
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts left before the counter reads zero. Informational only:
    /// the fail-open rule still admits the third submission.
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Seconds left on the resend countdown, if one is running.
    pub fn countdown_seconds(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::seconds)
    }

    /// The method and code that cleared the challenge, once at `Success`.
    pub fn verified(&self) -> Option<&(TwoFactorMethod, String)> {
        self.verified.as_ref()
    }

    /// Localized success-screen message.
    pub fn success_message(&self) -> StatusMessage {
        StatusMessage {
            title: self.i18n.translate("common.success"),
            body: self.i18n.translate("twoFactor.verified"),
        }
    }
}

/// Format a countdown as `m:ss` for display.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
