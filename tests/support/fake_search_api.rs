use async_trait::async_trait;
use searchsync::api::{ApiError, SearchApi};
use searchsync::search::SearchParams;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// In-memory search endpoint that records every request.
///
/// A gated api blocks each fetch until [`FakeSearchApi::release`] hands out a permit.
pub struct FakeSearchApi {
    calls: Mutex<Vec<SearchParams>>,
    failure: Option<String>,
    gate: Option<Semaphore>,
}

impl FakeSearchApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
            gate: None,
        }
    }

    /// Every fetch fails before reaching the network, as with a bad endpoint
    pub fn invalid_url(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    /// Let one blocked fetch finish
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<SearchParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for FakeSearchApi {
    async fn fetch(&self, params: &SearchParams) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(params.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        match &self.failure {
            Some(reason) => Err(ApiError::InvalidUrl(reason.clone())),
            None => Ok(()),
        }
    }
}
