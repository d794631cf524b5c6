//! Router assembly and shared request state.
//!
//! The card store is opened once at startup from [`ServerConfig`] and shared
//! with every handler through [`AppState`]; nothing is process-global.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use bingo_core::{CardStore, FileStore, MemoryStore, StoreResult};
use tracing::{debug, info, Instrument};

use crate::assets;
use crate::config::ServerConfig;
use crate::handlers;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CardStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Open the store the configuration asks for.
    pub fn from_config(config: ServerConfig) -> StoreResult<Self> {
        let store: Arc<dyn CardStore> = if config.in_memory {
            info!("Using in-memory card store (nothing will be persisted)");
            Arc::new(MemoryStore::new())
        } else {
            let store = FileStore::open(&config.data_dir)?;
            info!("Card data directory: {}", store.data_dir().display());
            Arc::new(store)
        };
        Ok(Self::new(store, config))
    }
}

/// Build the HTTP router.
///
/// API routes always win. With an assets directory every other path is
/// served from it; without one, `/` answers a health check.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(
            "/cards",
            get(handlers::list_cards).post(handlers::create_card),
        )
        .route(
            "/cards/:id",
            get(handlers::get_card).put(handlers::update_card),
        );

    let router = if state.config.assets_dir.is_some() {
        router.fallback(assets::serve_asset)
    } else {
        router.route("/", get(handlers::health))
    };

    router
        .layer(from_fn(cors_middleware))
        .layer(from_fn(request_tracing_middleware))
        .with_state(state)
}

/// Allow any origin and any requested headers. Preflights are answered here
/// without reaching a route.
async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();
    let requested_headers = req
        .headers()
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned();

    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = resp.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        origin.unwrap_or_else(|| HeaderValue::from_static("*")),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,PUT,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        requested_headers.unwrap_or_else(|| HeaderValue::from_static("content-type")),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(header::VARY, HeaderValue::from_static("origin"));
    resp
}

async fn request_tracing_middleware(req: Request<Body>, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %req.method(),
        route = %req.uri().path(),
    );
    let started = Instant::now();

    async move {
        let resp = next.run(req).await;
        debug!(
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );
        resp
    }
    .instrument(span)
    .await
}
