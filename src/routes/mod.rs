use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_contact::Relay;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod theme;

pub use contact::ContactFormView;
pub use index::IndexTemplate;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub relay: Arc<dyn Relay>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            theme: template.theme,
            profile: template.profile(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/theme", post(theme::toggle))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
