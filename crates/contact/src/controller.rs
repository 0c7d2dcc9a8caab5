use reqwest::StatusCode;
use thiserror::Error;
use tokio::sync::watch;

use crate::{
    ContactFormInput, FailureReason, Field, Relay, RelayError, SubmissionOutcome,
    SubmissionStatus,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySending,
}

/// Everything the form surface renders: the field values and the status.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: ContactFormInput,
    pub status: SubmissionStatus,
}

impl FormState {
    pub fn is_trigger_enabled(&self) -> bool {
        !self.status.is_sending()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }
}

/// Owns a contact form and drives its submissions through a [`Relay`].
///
/// State lives in a `watch` channel so a surface can [`subscribe`] to every
/// transition. The channel lock is only taken for short synchronous updates,
/// never across the relay call, so field edits and reads stay available
/// while a submission is in flight.
///
/// [`subscribe`]: SubmissionController::subscribe
pub struct SubmissionController<R> {
    relay: R,
    state: watch::Sender<FormState>,
}

impl<R: Relay> SubmissionController<R> {
    pub fn new(relay: R) -> Self {
        Self::with_fields(relay, ContactFormInput::default())
    }

    pub fn with_fields(relay: R, fields: ContactFormInput) -> Self {
        Self {
            relay,
            state: watch::Sender::new(FormState {
                fields,
                status: SubmissionStatus::Idle,
            }),
        }
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.fields.set(field, value));
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn fields(&self) -> ContactFormInput {
        self.state.borrow().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status
    }

    pub fn message(&self) -> Option<&'static str> {
        self.state.borrow().message()
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.state.borrow().is_trigger_enabled()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Sends the current field values to the relay once.
    ///
    /// Rejected with [`SubmitError::AlreadySending`] while another submission
    /// is in flight. Otherwise the status moves to `Sending`, the relay is
    /// awaited without timeout and the outcome becomes the new resting
    /// status. Fields are cleared on success only.
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        let mut input = None;
        self.state.send_if_modified(|state| {
            if state.status.is_sending() {
                return false;
            }

            state.status = SubmissionStatus::Sending;
            input = Some(state.fields.clone());
            true
        });

        let Some(input) = input else {
            tracing::warn!("contact submission rejected, another one is in flight");
            return Err(SubmitError::AlreadySending);
        };

        tracing::info!("sending contact message");
        tracing::debug!(name = %input.name, email = %input.email, "contact message sender");

        let guard = SendingGuard { state: &self.state };
        let outcome = classify(self.relay.deliver(&input).await);
        guard.disarm();

        self.state.send_modify(|state| {
            state.status = outcome.into();
            if outcome.is_success() {
                state.fields.clear();
            }
        });

        Ok(outcome)
    }
}

/// Puts a `Sending` form back to `Idle` when a submission is dropped
/// before the relay answers.
struct SendingGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl SendingGuard<'_> {
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        tracing::warn!("contact submission abandoned before the relay answered");

        self.state.send_if_modified(|state| {
            if !state.status.is_sending() {
                return false;
            }

            state.status = SubmissionStatus::Idle;
            true
        });
    }
}

fn classify(result: Result<StatusCode, RelayError>) -> SubmissionOutcome {
    match result {
        Ok(status) if status.is_success() => {
            tracing::info!(%status, "contact message delivered");
            SubmissionOutcome::Succeeded
        }
        Ok(status) => {
            tracing::warn!(%status, "contact relay rejected message");
            SubmissionOutcome::Failed(FailureReason::ServerRejected)
        }
        Err(err) => {
            tracing::error!("{err}");
            SubmissionOutcome::Failed(FailureReason::NetworkError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_splits_on_status_class() {
        assert_eq!(classify(Ok(StatusCode::OK)), SubmissionOutcome::Succeeded);
        assert_eq!(
            classify(Ok(StatusCode::NO_CONTENT)),
            SubmissionOutcome::Succeeded
        );
        assert_eq!(
            classify(Ok(StatusCode::FOUND)),
            SubmissionOutcome::Failed(FailureReason::ServerRejected)
        );
        assert_eq!(
            classify(Ok(StatusCode::UNPROCESSABLE_ENTITY)),
            SubmissionOutcome::Failed(FailureReason::ServerRejected)
        );
        assert_eq!(
            classify(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            SubmissionOutcome::Failed(FailureReason::ServerRejected)
        );
        assert_eq!(
            classify(Err(RelayError::Transport("connection refused".to_owned()))),
            SubmissionOutcome::Failed(FailureReason::NetworkError)
        );
    }

    #[test]
    fn test_new_form_is_idle_and_enabled() {
        let state = FormState::default();

        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.is_trigger_enabled());
        assert_eq!(state.message(), None);
        assert!(state.fields.is_empty());
    }
}
