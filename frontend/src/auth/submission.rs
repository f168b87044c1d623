use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use log::{error, info};
use yew::Callback;

use super::magic::MagicHandle;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Magic Link is not configured yet. Add your publishable key (window.__MAGIC_PUBLISHABLE_KEY__).";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const LOGIN_SUCCEEDED_MESSAGE: &str = "✅ Login link verified. Check your inbox to continue.";
pub const CONFIGURE_KEY_NOTICE: &str =
    "Configure Magic publishable key: set window.__MAGIC_PUBLISHABLE_KEY__ (or MAGIC_PUBLISHABLE_KEY at build time).";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    NotConfigured,
    Provider,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(FailureReason),
    Invalid(InvalidReason),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Succeeded => LOGIN_SUCCEEDED_MESSAGE,
            SubmissionOutcome::Failed(FailureReason::NotConfigured) => NOT_CONFIGURED_MESSAGE,
            SubmissionOutcome::Failed(FailureReason::Provider) => LOGIN_FAILED_MESSAGE,
            SubmissionOutcome::Invalid(InvalidReason::EmptyEmail) => INVALID_EMAIL_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Done(SubmissionOutcome),
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            SubmissionState::Done(outcome) => Some(outcome.message()),
            SubmissionState::Idle | SubmissionState::Pending => None,
        }
    }

    /// Line under the form. An idle form on an unconfigured key shows the
    /// configuration notice; outcomes always take precedence over it.
    pub fn status_line(&self, key_configured: bool) -> Option<&'static str> {
        match self {
            SubmissionState::Idle if !key_configured => Some(CONFIGURE_KEY_NOTICE),
            state => state.status_message(),
        }
    }
}

/// Result of a `submit` call.
pub enum Submission {
    /// Resolved without contacting the provider.
    Settled(SubmissionOutcome),
    /// The provider was called; drive the future to record its outcome.
    InFlight(LocalBoxFuture<'static, SubmissionOutcome>),
    /// A request is already in flight.
    Ignored,
}

/// Drives the email-capture form. Clones share the same state.
#[derive(Clone)]
pub struct SubmissionController {
    handle: Option<MagicHandle>,
    state: Rc<RefCell<SubmissionState>>,
    on_change: Callback<SubmissionState>,
}

impl SubmissionController {
    pub fn new(handle: Option<MagicHandle>, on_change: Callback<SubmissionState>) -> Self {
        SubmissionController {
            handle,
            state: Rc::new(RefCell::new(SubmissionState::Idle)),
            on_change,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    pub fn submit(&self, input: &str) -> Submission {
        if self.is_busy() {
            info!("Ignoring submit while a login request is in flight");
            return Submission::Ignored;
        }

        let email = input.trim();
        if email.is_empty() {
            return self.settle_now(SubmissionOutcome::Invalid(InvalidReason::EmptyEmail));
        }
        let Some(handle) = self.handle.as_ref() else {
            return self.settle_now(SubmissionOutcome::Failed(FailureReason::NotConfigured));
        };

        self.transition(SubmissionState::Pending);
        let login = handle.login_with_magic_link(email);
        let controller = self.clone();

        Submission::InFlight(
            async move {
                let outcome = match login.await {
                    Ok(()) => SubmissionOutcome::Succeeded,
                    Err(err) => {
                        error!("Magic link login failed: {}", err);
                        SubmissionOutcome::Failed(FailureReason::Provider)
                    }
                };
                controller.transition(SubmissionState::Done(outcome.clone()));
                outcome
            }
            .boxed_local(),
        )
    }

    /// Clears a finished outcome once the user edits the input again.
    pub fn reset(&self) {
        if matches!(*self.state.borrow(), SubmissionState::Done(_)) {
            self.transition(SubmissionState::Idle);
        }
    }

    fn settle_now(&self, outcome: SubmissionOutcome) -> Submission {
        self.transition(SubmissionState::Done(outcome.clone()));
        Submission::Settled(outcome)
    }

    fn transition(&self, next: SubmissionState) {
        *self.state.borrow_mut() = next.clone();
        self.on_change.emit(next);
    }
}
