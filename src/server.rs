//! Minimal HTTP front for [`ConjugationService`].
//!
//! Routes:
//! - `GET /api/v1/search-word?l=&q=` → `{word, data}`
//! - `GET /api/v1/check-word?l=&q=` → `{data}`
//!
//! Failures answer `{"detail": "..."}` with 504, 502 or 500 depending on the
//! error kind.

use crate::service::ConjugationService;
use crate::{Error, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::mpsc;

const SEARCH_WORD: &str = "/api/v1/search-word";
const CHECK_WORD: &str = "/api/v1/check-word";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SearchWord,
    CheckWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub route: Route,
    pub lang: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn detail(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "detail": detail.into() }),
        }
    }

    pub fn from_error(err: &Error) -> Self {
        Self::detail(err.status_code(), err.to_string())
    }

    fn into_http(self) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let response =
            tiny_http::Response::from_string(self.body.to_string()).with_status_code(self.status);
        match tiny_http::Header::from_bytes("Content-Type", "application/json") {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.replace('+', " "))
}

/// Match method and path, then pull `l` and `q` from the query string.
/// Repeated keys keep the last value.
pub fn parse_request(
    method: &tiny_http::Method,
    url: &str,
) -> std::result::Result<ApiRequest, ApiResponse> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let route = match path.trim_end_matches('/') {
        SEARCH_WORD => Route::SearchWord,
        CHECK_WORD => Route::CheckWord,
        _ => return Err(ApiResponse::detail(404, "Not Found")),
    };
    if *method != tiny_http::Method::Get {
        return Err(ApiResponse::detail(405, "Method Not Allowed"));
    }

    let mut request = ApiRequest {
        route,
        lang: None,
        query: None,
    };
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match decode_component(key).as_str() {
            "l" => request.lang = Some(decode_component(value)),
            "q" => request.query = Some(decode_component(value)),
            _ => {}
        }
    }
    Ok(request)
}

pub async fn dispatch(service: &ConjugationService, request: &ApiRequest) -> ApiResponse {
    let lang = request.lang.as_deref();
    let query = request.query.as_deref();
    let result = match request.route {
        Route::SearchWord => service
            .search_word(lang, query)
            .await
            .and_then(|c| serde_json::to_value(c).map_err(Error::from)),
        Route::CheckWord => service.check_word(lang, query).await,
    };
    match result {
        Ok(body) => ApiResponse::ok(body),
        Err(err) => {
            tracing::warn!(route = ?request.route, %err, "request failed");
            ApiResponse::from_error(&err)
        }
    }
}

/// Bind the listening socket. Use port 0 for an ephemeral port.
pub fn bind(addr: &str) -> Result<tiny_http::Server> {
    tiny_http::Server::http(addr).map_err(|e| Error::Server(format!("failed to bind {addr}: {e}")))
}

/// Serve requests until the listener fails.
pub async fn serve(server: tiny_http::Server, service: Arc<ConjugationService>) -> Result<()> {
    if let Some(addr) = server.server_addr().to_ip() {
        tracing::info!(%addr, "conjugation service listening");
    }

    let (tx, mut rx) = mpsc::channel::<tiny_http::Request>(64);
    // recv() blocks, so accept on a dedicated thread.
    let acceptor = tokio::task::spawn_blocking(move || {
        loop {
            match server.recv() {
                Ok(request) => {
                    if tx.blocking_send(request).is_err() {
                        return Ok(());
                    }
                }
                Err(e) => return Err(Error::Server(format!("accept failed: {e}"))),
            }
        }
    });

    while let Some(request) = rx.recv().await {
        let service = Arc::clone(&service);
        tokio::spawn(async move { handle(&service, request).await });
    }

    acceptor
        .await
        .map_err(|e| Error::Server(format!("acceptor task: {e}")))?
}

async fn handle(service: &ConjugationService, request: tiny_http::Request) {
    let response = match parse_request(request.method(), request.url()) {
        Ok(api) => dispatch(service, &api).await,
        Err(response) => response,
    };
    tracing::info!(
        method = %request.method(),
        url = request.url(),
        status = response.status,
        "request handled"
    );

    let http = response.into_http();
    match tokio::task::spawn_blocking(move || request.respond(http)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(%e, "failed to write response"),
        Err(e) => tracing::warn!(%e, "response task panicked"),
    }
}
