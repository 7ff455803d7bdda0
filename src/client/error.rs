use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request was superseded or the client was disposed
    #[error("request cancelled")]
    Cancelled,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("simulation backend answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode simulation snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<futures::future::Aborted> for FetchError {
    fn from(_: futures::future::Aborted) -> Self {
        Self::Cancelled
    }
}
