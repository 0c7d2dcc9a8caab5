use strum::{AsRefStr, Display};

pub const SUCCEEDED_MESSAGE: &str = "Message sent — thank you!";
pub const SERVER_REJECTED_MESSAGE: &str = "Something went wrong. Try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Try again later.";

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum FailureReason {
    /// The relay answered with a non-success status.
    ServerRejected,
    /// The request never completed.
    NetworkError,
}

impl FailureReason {
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::ServerRejected => SERVER_REJECTED_MESSAGE,
            FailureReason::NetworkError => NETWORK_ERROR_MESSAGE,
        }
    }
}

/// Where a form sits in its submission lifecycle.
///
/// The status line shown next to the trigger is derived from this value, so
/// there is no separate message to keep in sync. `Succeeded` and `Failed`
/// are resting states just like `Idle`: only `Sending` disables the trigger.
#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(FailureReason),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Succeeded => Some(SUCCEEDED_MESSAGE),
            SubmissionStatus::Failed(reason) => Some(reason.message()),
        }
    }
}

/// Terminal classification of a single submission.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(FailureReason),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded)
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Succeeded => SUCCEEDED_MESSAGE,
            SubmissionOutcome::Failed(reason) => reason.message(),
        }
    }
}

impl From<SubmissionOutcome> for SubmissionStatus {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Succeeded => SubmissionStatus::Succeeded,
            SubmissionOutcome::Failed(reason) => SubmissionStatus::Failed(reason),
        }
    }
}
