//! Shared helpers for integration tests

use patchkeeper::server::model::app::AppState;
use patchkeeper_test_utils::TestContext;

/// Extension trait for TestContext to create an AppState with default notification settings
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state::<AppState>()
    }
}

/// Reads a response body as JSON
pub async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
