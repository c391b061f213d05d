//! Stub REST Backend
//!
//! An axum server on an ephemeral local port standing in for the MedVerify
//! API. Tests script a response per method and path, point a client at
//! [`StubBackend::base_url`], and inspect what was sent afterwards.
//!
//! ```rust,ignore
//! let backend = StubBackend::start().await;
//! backend.respond("POST", "/api/users", StubResponse::json(200, json!({"user_id": 7, ...})));
//!
//! let client = ApiClient::new(&HttpClientConfig::new(backend.base_url()))?;
//! client.create_user(&request).await?;
//!
//! assert_eq!(backend.requests_to("/api/users").len(), 1);
//! ```
//!
//! Unscripted routes answer 404 with `{"detail": "Not Found"}`.

use axum::body::{to_bytes, Body};
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::debug;

/// Body of a recorded request, decoded by content type
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBody {
    Empty,
    Json(Value),
    Multipart(Vec<RecordedPart>),
    /// Anything that is neither JSON nor multipart
    Raw(String),
}

/// One part of a recorded multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    /// Text content, for parts without a file name
    pub text: Option<String>,
    pub size: usize,
}

impl RecordedPart {
    pub fn is_file(&self) -> bool {
        self.file_name.is_some()
    }
}

/// A request as the stub received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: RecordedBody,
}

impl RecordedRequest {
    /// Value of a query parameter, undecoded
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then_some(value)
        })
    }

    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RecordedBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn parts(&self) -> &[RecordedPart] {
        match &self.body {
            RecordedBody::Multipart(parts) => parts,
            _ => &[],
        }
    }

    /// Names of the multipart parts, in order
    pub fn part_names(&self) -> Vec<&str> {
        self.parts().iter().map(|part| part.name.as_str()).collect()
    }

    pub fn part(&self, name: &str) -> Option<&RecordedPart> {
        self.parts().iter().find(|part| part.name == name)
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }
}

/// Scripted response
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
    content_type: &'static str,
}

impl StubResponse {
    /// JSON response with the given status
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
        }
    }

    /// 200 with a JSON body
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// Plain-text response, for bodies that are not JSON
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain",
        }
    }

    /// Response with no body at all
    pub fn empty(status: u16) -> Self {
        Self::text(status, "")
    }
}

impl IntoResponse for StubResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        response
    }
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(String, String), StubResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Local HTTP server with scripted responses
pub struct StubBackend {
    addr: SocketAddr,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubBackend {
    /// Binds 127.0.0.1 on an ephemeral port and starts serving
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let router = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state, server }
    }

    /// Origin to configure the client with (no `/api` suffix)
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Scripts the response for a method and full path, e.g. `("GET", "/api/users")`
    pub fn respond(&self, method: &str, path: &str, response: StubResponse) -> &Self {
        lock(&self.state.routes).insert((method.to_uppercase(), path.to_string()), response);
        self
    }

    /// All requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    /// Requests received for one path
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    /// The only request received for a path
    ///
    /// # Panics
    ///
    /// Panics unless exactly one request reached the path.
    pub fn single_request(&self, path: &str) -> RecordedRequest {
        let mut requests = self.requests_to(path);
        assert_eq!(requests.len(), 1, "expected one request to {}, got {:?}", path, requests);
        requests.remove(0)
    }

    /// Paths requested so far, in arrival order
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(State(state): State<Arc<StubState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let query = parts.uri.query().map(str::to_string);
    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body = match content_type.as_deref() {
        _ if bytes.is_empty() => RecordedBody::Empty,
        Some(ct) if ct.starts_with("multipart/form-data") => {
            let request = Request::from_parts(parts, Body::from(bytes));
            RecordedBody::Multipart(read_multipart(request).await)
        }
        Some(ct) if ct.starts_with("application/json") => serde_json::from_slice(&bytes)
            .map(RecordedBody::Json)
            .unwrap_or_else(|_| RecordedBody::Raw(String::from_utf8_lossy(&bytes).into_owned())),
        _ => RecordedBody::Raw(String::from_utf8_lossy(&bytes).into_owned()),
    };

    debug!(%method, %path, "Stub backend received request");
    let response = lock(&state.routes).get(&(method.clone(), path.clone())).cloned();

    lock(&state.requests).push(RecordedRequest {
        method,
        path,
        query,
        content_type,
        body,
    });

    match response {
        Some(response) => response.into_response(),
        None => StubResponse::json(404, serde_json::json!({"detail": "Not Found"})).into_response(),
    }
}

async fn read_multipart(request: Request) -> Vec<RecordedPart> {
    let mut recorded = Vec::new();
    let Ok(mut multipart) = Multipart::from_request(request, &()).await else {
        return recorded;
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap_or_default();

        recorded.push(RecordedPart {
            text: file_name
                .is_none()
                .then(|| String::from_utf8_lossy(&data).into_owned()),
            name,
            file_name,
            content_type,
            size: data.len(),
        });
    }
    recorded
}
