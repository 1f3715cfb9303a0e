#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use composer_api::config::ServerConfig;
use composer_api::router::build_app_router;
use composer_api::state::AppState;
use composer_core::composer::PromptComposer;
use composer_core::error::ProviderError;
use composer_core::provider::{CompletionRequest, PromptProvider};

// ---------------------------------------------------------------------------
// Fake provider
// ---------------------------------------------------------------------------

/// What the fake provider does when called.
pub enum Behaviour {
    Reply(String),
    /// Sleep, then reply.
    Slow(Duration, String),
    Fail(fn() -> ProviderError),
    Panic,
}

/// Test double for [`PromptProvider`] that counts calls and records requests.
pub struct FakeProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeProvider {
    pub fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Behaviour::Reply(text.to_string()))
    }

    pub fn failing(make_error: fn() -> ProviderError) -> Arc<Self> {
        Self::new(Behaviour::Fail(make_error))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fake-model-1"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            Behaviour::Fail(make_error) => Err(make_error()),
            Behaviour::Panic => panic!("fake provider exploded"),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router with all middleware layers around
/// the given provider.
pub fn build_test_app(provider: Arc<FakeProvider>) -> Router {
    build_test_app_with_config(provider, test_config())
}

pub fn build_test_app_with_config(provider: Arc<FakeProvider>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        composer: PromptComposer::new(provider),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete, valid `/generate_prompt` body.
pub fn valid_body() -> Value {
    json!({
        "vague_prompt": "help me write a blog post about remote work",
        "purpose": "inform",
        "tone": "professional",
        "complexity": "intermediate",
        "target_audience": "team leads",
        "format": "blog post",
        "length": "800 words",
        "keywords": ["remote work", "productivity"],
        "style": "conversational",
        "references": ["GitLab handbook", "Basecamp Shape Up"],
        "vocabulary_level": "business",
        "emotion": "encouraging",
        "cultural_considerations": "global teams",
        "visual_aids": ["charts", "screenshots"],
        "interactivity": ["checklist"],
        "restrictions": "avoid jargon"
    })
}
