//! In-process axum server standing in for the SQL endpoint in tests.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A canned response, served when the `q` parameter contains `needle`.
#[derive(Debug, Clone)]
pub struct Route {
    needle: &'static str,
    status: u16,
    body: String,
}

impl Route {
    pub fn new(needle: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            needle,
            status,
            body: body.into(),
        }
    }

    pub fn ok(needle: &'static str, body: impl Into<String>) -> Self {
        Self::new(needle, 200, body)
    }
}

struct ServerState {
    routes: Vec<Route>,
    queries: Mutex<Vec<String>>,
}

pub struct TestServer {
    url: String,
    state: Arc<ServerState>,
}

impl TestServer {
    /// Endpoint URL, `http://127.0.0.1:<port>/sql`.
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Decoded `q` parameters received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.queries.lock().unwrap().clone()
    }
}

pub async fn serve(routes: Vec<Route>) -> TestServer {
    let state = Arc::new(ServerState {
        routes,
        queries: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/sql", get(answer))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestServer {
        url: format!("http://{}/sql", addr),
        state,
    }
}

async fn answer(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let sql = params.get("q").cloned().unwrap_or_default();
    state.queries.lock().unwrap().push(sql.clone());

    let (status, body) = state
        .routes
        .iter()
        .find(|r| sql.contains(r.needle))
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, r#"{"error":["no route"]}"#.to_string()));

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}
