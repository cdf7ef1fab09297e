//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - A fresh in-memory database per test app
//! - A stub chatbot webhook served on a local port
//! - Request and response helpers

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, Response, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chatrooms_common::db;
use chatrooms_relay::WebhookRelay;
use serde_json::Value;

/// Relay timeout used by every test app
pub const RELAY_TIMEOUT: Duration = Duration::from_millis(300);

/// What the stub chatbot does with each request
#[derive(Clone)]
pub enum StubBehavior {
    /// Respond 200 with this JSON body
    Reply(Value),
    /// Respond with this status and a plain-text body
    Status(StatusCode),
    /// Sleep past the relay timeout before answering
    Hang,
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Stub chatbot webhook listening on 127.0.0.1
pub struct StubChatbot {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubChatbot {
    pub async fn start(behavior: StubBehavior) -> Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            requests: requests.clone(),
        };

        let router = Router::new()
            .route("/chat", post(stub_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            url: format!("http://{}/chat", addr),
            requests,
        })
    }

    /// Bodies received so far, oldest first
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stub_handler(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.requests.lock().unwrap().push(body);

    match state.behavior {
        StubBehavior::Reply(reply) => Json(reply).into_response(),
        StubBehavior::Status(status) => (status, "stub failure").into_response(),
        StubBehavior::Hang => {
            tokio::time::sleep(RELAY_TIMEOUT * 10).await;
            Json(serde_json::json!([{"role": "assistant", "content": "too late"}]))
                .into_response()
        }
    }
}

/// Test application backed by an in-memory database and a real webhook relay
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let pool = db::connect_in_memory().await?;
        let relay = WebhookRelay::new(RELAY_TIMEOUT)?;
        let router = chatrooms_app::router(pool, Arc::new(relay));
        Ok(Self { router })
    }

    pub fn test_router(&self) -> Router {
        self.router.clone()
    }
}

/// Helper: build a request with an optional JSON body
pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(b) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
