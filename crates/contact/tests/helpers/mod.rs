use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, extract::State, http::HeaderMap, routing::post};
use portfolio_contact::{ContactFormInput, HttpRelay, Relay, RelayError};
use reqwest::StatusCode;
use tokio::{
    net::TcpListener,
    sync::{Semaphore, mpsc},
};
use url::Url;

pub fn input() -> ContactFormInput {
    ContactFormInput::new("Ada Lovelace", "ada@example.com", "Hello from the engine room")
}

enum Reply {
    Status(StatusCode),
    Unreachable,
}

/// Relay answering every delivery the same way and remembering payloads.
pub struct StubRelay {
    reply: Reply,
    requests: Mutex<Vec<ContactFormInput>>,
}

#[allow(dead_code)]
impl StubRelay {
    pub fn answering(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status),
            requests: Mutex::default(),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Unreachable,
            requests: Mutex::default(),
        })
    }

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

/// Relay that holds every delivery until the test opens the gate.
pub struct GatedRelay {
    gate: Semaphore,
    status: StatusCode,
}

#[allow(dead_code)]
impl GatedRelay {
    pub fn new(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            status,
        })
    }

    pub fn open(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl Relay for GatedRelay {
    async fn deliver(&self, _input: &ContactFormInput) -> Result<StatusCode, RelayError> {
        self.gate
            .acquire()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .forget();

        Ok(self.status)
    }
}

#[allow(dead_code)]
#[derive(Debug)]
pub struct Captured {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct SinkState {
    status: StatusCode,
    tx: mpsc::UnboundedSender<Captured>,
}

async fn capture(State(state): State<SinkState>, headers: HeaderMap, body: String) -> StatusCode {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let _ = state.tx.send(Captured { content_type, body });

    state.status
}

/// Starts a local form endpoint answering with `status` and returns its url
/// together with every request it receives.
#[allow(dead_code)]
pub async fn spawn_sink(
    status: StatusCode,
) -> anyhow::Result<(Url, mpsc::UnboundedReceiver<Captured>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route("/f/portfolio", post(capture))
        .with_state(SinkState { status, tx });

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((Url::parse(&format!("http://{addr}/f/portfolio"))?, rx))
}

/// Url of a port nothing listens on.
#[allow(dead_code)]
pub async fn closed_endpoint() -> anyhow::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(Url::parse(&format!("http://{addr}/f/portfolio"))?)
}

/// Http relay that ignores any proxy configured in the environment.
#[allow(dead_code)]
pub fn http_relay(endpoint: Url) -> HttpRelay {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build http client");

    HttpRelay::with_client(client, endpoint)
}
