use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tokio::net::TcpListener;

use super::{ProjectPayload, ProjectResponse, run_projection};
use crate::core::CurrencyTable;
use crate::report::{HtmlRenderer, Renderer};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Embedded UI files: path, content type, body.
const ASSETS: [(&str, &str, &str); 4] = [
    ("/", "text/html; charset=utf-8", INDEX_HTML),
    ("/index.html", "text/html; charset=utf-8", INDEX_HTML),
    ("/styles.css", "text/css; charset=utf-8", STYLES_CSS),
    ("/app.js", "application/javascript; charset=utf-8", APP_JS),
];

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub currencies: CurrencyTable,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new().route(
        "/api/project",
        get(project_from_query).post(project_from_json),
    );
    for (path, content_type, body) in ASSETS {
        app = app.route(
            path,
            get(move || async move { embedded_asset(content_type, body) }),
        );
    }
    app.fallback(|| async { error_response(StatusCode::NOT_FOUND, "no route for this path") })
        .with_state(Arc::new(state))
}

pub async fn run_http_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(address = %local, "nestegg HTTP API listening");
    tracing::info!("Local access: http://127.0.0.1:{}/", local.port());

    axum::serve(listener, app).await
}

fn embedded_asset(content_type: &'static str, body: &'static str) -> Response {
    with_cache_control(([(header::CONTENT_TYPE, content_type)], body))
}

async fn project_from_query(
    State(state): State<Arc<AppState>>,
    payload: Result<Query<ProjectPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(&state, payload),
        Err(rejection) => malformed_request(rejection.status(), rejection.body_text()),
    }
}

async fn project_from_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(&state, payload),
        Err(rejection) => malformed_request(rejection.status(), rejection.body_text()),
    }
}

fn malformed_request(status: StatusCode, reason: String) -> Response {
    tracing::warn!(%status, reason = %reason, "malformed projection request");
    error_response(status, &reason)
}

fn project_handler_impl(state: &AppState, payload: ProjectPayload) -> Response {
    let report = match run_projection(payload) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(error = %err, "rejected projection request");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let symbol = state.currencies.symbol(&report.result.currency_label);
    let html = HtmlRenderer.render(&report, &symbol);
    json_response(
        StatusCode::OK,
        ProjectResponse {
            symbol,
            report,
            html,
        },
    )
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
