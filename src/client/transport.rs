use futures::future::{AbortRegistration, Abortable};
use url::Url;
use crate::models::SimulationSnapshot;
use super::FetchError;

/// Fetches one snapshot from the simulation backend
///
/// Implementations must stop work and return [`FetchError::Cancelled`] once
/// the handle paired with `cancel` is aborted.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn fetch_snapshot(
        &self,
        url: &Url,
        cancel: AbortRegistration,
    ) -> Result<SimulationSnapshot, FetchError>;
}

/// HTTP transport backed by `reqwest` (fetch API on wasm)
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: &Url) -> Result<SimulationSnapshot, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Transport for HttpTransport {
    async fn fetch_snapshot(
        &self,
        url: &Url,
        cancel: AbortRegistration,
    ) -> Result<SimulationSnapshot, FetchError> {
        Abortable::new(self.get(url), cancel).await?
    }
}
