use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use portfolio::{
    AppState, Config,
    config::{ObservabilityConfig, RelayConfig, ServerConfig},
    content::Profile,
};
use portfolio_contact::{ContactFormInput, Relay, RelayError};

pub enum Reply {
    Status(StatusCode),
    Unreachable,
}

/// Relay double answering every delivery the same way.
pub struct StubRelay {
    reply: Reply,
    requests: Mutex<Vec<ContactFormInput>>,
}

impl StubRelay {
    pub fn requests(&self) -> Vec<ContactFormInput> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relay for StubRelay {
    async fn deliver(&self, input: &ContactFormInput) -> Result<StatusCode, RelayError> {
        self.requests.lock().unwrap().push(input.clone());

        match self.reply {
            Reply::Status(status) => Ok(status),
            Reply::Unreachable => Err(RelayError::Transport("connection refused".to_owned())),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub relay: Arc<StubRelay>,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        relay: RelayConfig {
            endpoint: "https://formspree.io/f/test".to_owned(),
        },
        observability: ObservabilityConfig::default(),
        profile: Profile::default(),
    }
}

pub fn create_test_app(reply: Reply) -> TestApp {
    let relay = Arc::new(StubRelay {
        reply,
        requests: Mutex::default(),
    });

    let router = portfolio::router(AppState {
        config: Arc::new(test_config()),
        relay: relay.clone(),
    });

    TestApp { router, relay }
}

#[allow(dead_code)]
pub fn contact_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
