//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use holocron::server::model::app::AppState;
use holocron_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a response body and deserializes it as JSON
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
