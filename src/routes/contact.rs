use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use portfolio_contact::{ContactFormInput, FormState, SubmissionController, SubmissionStatus};
use serde::Deserialize;
use validator::Validate;

use crate::{
    routes::{AppState, IndexTemplate},
    template::Template,
};

pub const INVALID_INPUT_MESSAGE: &str = "Please fill in every field with a valid email address.";

/// What the contact form section renders: field values, trigger state and
/// the status line next to the trigger.
#[derive(Default, Clone, Debug)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sending: bool,
    pub status_message: Option<&'static str>,
    pub status_class: &'static str,
}

impl ContactFormView {
    fn invalid(input: ContactFormInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            message: input.message,
            sending: false,
            status_message: Some(INVALID_INPUT_MESSAGE),
            status_class: "error",
        }
    }
}

impl From<FormState> for ContactFormView {
    fn from(state: FormState) -> Self {
        let status_class = match state.status {
            SubmissionStatus::Succeeded => "success",
            SubmissionStatus::Failed(_) => "error",
            SubmissionStatus::Idle | SubmissionStatus::Sending => "",
        };

        Self {
            sending: !state.is_trigger_enabled(),
            status_message: state.message(),
            status_class,
            name: state.fields.name,
            email: state.fields.email,
            message: state.fields.message,
        }
    }
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let input = ContactFormInput::new(input.name, input.email, input.message);

    if let Err(errors) = input.validate() {
        tracing::debug!(%errors, "contact form rejected before sending");

        return template.render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            IndexTemplate {
                theme: template.theme,
                profile: template.profile(),
                form: ContactFormView::invalid(input),
            },
        );
    }

    let controller = SubmissionController::with_fields(app_state.relay.clone(), input);
    if let Err(err) = controller.submit().await {
        tracing::error!("{err}");
    }

    template.render(IndexTemplate {
        theme: template.theme,
        profile: template.profile(),
        form: controller.state().into(),
    })
}
