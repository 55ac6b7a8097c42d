//! Shared helpers: an in-process mock translation provider and router calls

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::{Form, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use translate_gateway::{ProviderConfig, TranslationClient};

/// One request received by the mock provider
#[derive(Debug, Clone)]
pub struct Recorded {
    pub form: HashMap<String, String>,
    pub accept: Option<String>,
}

struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    calls: Mutex<Vec<Recorded>>,
}

/// LibreTranslate stand-in answering every `/translate` with a fixed reply
pub struct MockProvider {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockProvider {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).expect("status"),
            body: body.to_string(),
            delay,
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/translate", post(translate))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock provider");
        let addr = listener.local_addr().expect("mock addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock provider");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.state.calls.lock().expect("calls lock").clone()
    }

    pub fn client(&self) -> TranslationClient {
        TranslationClient::new(ProviderConfig::new(&self.base_url)).expect("client")
    }

    pub fn client_with_key(&self, api_key: &str) -> TranslationClient {
        TranslationClient::new(ProviderConfig::new(&self.base_url).with_api_key(api_key))
            .expect("client")
    }
}

async fn translate(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.calls.lock().expect("calls lock").push(Recorded {
        form,
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}

/// Base URL where nothing is listening
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Send a request through the router, returning status, headers and raw body
pub async fn call(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = router.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, headers, bytes.to_vec())
}

/// POST `body` as JSON to `/api/translate`
pub async fn post_translate(router: &Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let (status, _, bytes) = call(router, request).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
