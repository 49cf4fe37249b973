//! Router-level tests driving the full axum application.


use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tempfile::TempDir;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use wiremock::MockServer;

use crate::server::{
    router::router,
    service::{auth::TokenService, storage::StorageService},
    state::AppState,
};

const ADMIN_PASSWORD: &str = "correct horse";

/// Application wired to in-memory SQLite and a mock object store.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
    tokens: Arc<TokenService>,
    storage_server: MockServer,
    staging: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_club_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.unwrap();

        let storage_server = MockServer::start().await;
        let storage =
            StorageService::new(reqwest::Client::new(), &storage_server.uri(), "service-key");
        let staging = tempfile::tempdir().unwrap();

        let state = AppState::new(
            db.clone(),
            storage,
            TokenService::new("test-secret"),
            ADMIN_PASSWORD,
            staging.path().to_path_buf(),
        );
        let tokens = state.tokens.clone();

        Self {
            router: router(state),
            db,
            tokens,
            storage_server,
            staging,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.tokens.issue().unwrap())
    }

    /// Sends a request and returns the status and the parsed JSON body (`Null` if empty).
    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Sends a JSON request carrying a valid admin token.
    async fn send_json_as_admin(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(json_request(method, uri, body, Some(&self.bearer())))
            .await
    }

    async fn delete_as_admin(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::delete(uri)
                .header(header::AUTHORIZATION, self.bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    authorization: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Tests the health probe against a reachable database.
///
/// Expected: 200 with status ok and database connected
#[tokio::test]
async fn health_reports_connected_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "status": "ok", "database": "connected" })
    );
}

/// Tests that unknown routes are not hidden behind the access gate.
///
/// Expected: 404 without a token
#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
