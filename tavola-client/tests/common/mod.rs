//! In-process mock backend for integration tests
//!
//! Records every request (method, raw path, headers, multipart parts) and
//! answers from a table of canned responses. Unknown routes get 404.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl RecordedPart {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub parts: Vec<RecordedPart>,
}

impl RecordedRequest {
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn part(&self, name: &str) -> Option<&RecordedPart> {
        self.parts.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    routes: Mutex<HashMap<(Method, String), CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.insert(method, path, CannedResponse {
            status,
            body: Some(body),
        });
    }

    /// Answer `method path` with an empty body.
    pub fn respond_empty(&self, method: Method, path: &str, status: StatusCode) {
        self.insert(method, path, CannedResponse { status, body: None });
    }

    fn insert(&self, method: Method, path: &str, response: CannedResponse) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(State(state): State<Arc<MockState>>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let headers = request.headers().clone();

    let is_multipart = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    let mut parts = Vec::new();
    if is_multipart {
        let mut multipart = match Multipart::from_request(request, &()).await {
            Ok(multipart) => multipart,
            Err(rejection) => return rejection.into_response(),
        };
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            parts.push(RecordedPart {
                name,
                file_name,
                content_type,
                data,
            });
        }
    }

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        parts,
    });

    let canned = state.routes.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some(CannedResponse {
            status,
            body: Some(body),
        }) => (status, axum::Json(body)).into_response(),
        Some(CannedResponse { status, body: None }) => status.into_response(),
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}
