/// Native share sheet capability

use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;

use crate::share::ShareRequest;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet
    #[error("share cancelled by user")]
    Cancelled,

    #[error("share failed: {0}")]
    Failed(String),
}

/// A host share sheet that can hand a request to another app
pub trait NativeShare: Send + Sync {
    fn share<'a>(&'a self, request: &'a ShareRequest) -> BoxFuture<'a, Result<(), ShareError>>;
}

/// Share sheet that answers every request with a fixed result and keeps the
/// requests it was given.
pub struct RecordingShare {
    result: Result<(), ShareError>,
    requests: Mutex<Vec<ShareRequest>>,
}

impl RecordingShare {
    pub fn new(result: Result<(), ShareError>) -> Self {
        RecordingShare {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Ok(()))
    }

    pub fn cancelled() -> Self {
        Self::new(Err(ShareError::Cancelled))
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(Err(ShareError::Failed(reason.to_string())))
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl NativeShare for RecordingShare {
    fn share<'a>(&'a self, request: &'a ShareRequest) -> BoxFuture<'a, Result<(), ShareError>> {
        async move {
            if let Ok(mut g) = self.requests.lock() {
                g.push(request.clone());
            }
            self.result.clone()
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_share_records_and_replays() {
        let s = RecordingShare::cancelled();
        let req = ShareRequest::new("t", "x", "https://example.com/");
        assert_eq!(s.share(&req).await, Err(ShareError::Cancelled));
        assert_eq!(s.requests(), vec![req]);
    }
}
