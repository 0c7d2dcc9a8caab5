use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::ContactFormInput;

#[derive(Error, Debug)]
pub enum RelayError {
    /// The request never produced a response (DNS, refused connection,
    /// offline, aborted).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Delivers a contact message to wherever it ends up.
///
/// Implementations report the status the far end answered with; whether that
/// status counts as success is the controller's call, not the relay's.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn deliver(&self, input: &ContactFormInput) -> Result<StatusCode, RelayError>;
}

#[async_trait]
impl<T: Relay + ?Sized> Relay for Arc<T> {
    async fn deliver(&self, input: &ContactFormInput) -> Result<StatusCode, RelayError> {
        (**self).deliver(input).await
    }
}

/// Third-party form relay reached over HTTP (Formspree and friends).
///
/// Every delivery is a single JSON `POST` to the configured endpoint. The
/// client carries no timeout and no retry policy.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    client: Client,
    endpoint: Url,
}

impl HttpRelay {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn deliver(&self, input: &ContactFormInput) -> Result<StatusCode, RelayError> {
        // `json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(response.status())
    }
}
