//! HTTP API server setup.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Translate requests into Checker operations
//! - Wire up tracing middleware
//! - Serve until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::checker::Checker;
use crate::http::request::{LogsQuery, SiteRequest};
use crate::http::response::{
    ApiError, HealthResponse, LogResponse, SiteCreated, SiteLogResponse, SitesCreated,
};
use crate::registry::Endpoint;

/// Entries returned by the logs route when no limit is given.
pub const DEFAULT_LOGS_LIMIT: usize = 50;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
}

/// HTTP server exposing a running checker.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    pub fn new(checker: Arc<Checker>) -> Self {
        Self {
            router: build_router(checker),
        }
    }

    /// Bind `bind_address` and run until `shutdown` resolves.
    pub async fn serve<F>(self, bind_address: &str, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(bind_address).await?;
        self.run(listener, shutdown).await
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP API starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP API stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(checker: Arc<Checker>) -> Router {
    Router::new()
        .route("/sites", post(add_site).get(list_sites))
        .route("/sites/batch", post(add_sites))
        .route("/sites/{id}/logs", get(site_logs))
        .route("/health", get(health))
        .with_state(AppState { checker })
        .layer(TraceLayer::new_for_http())
}

async fn add_site(
    State(state): State<AppState>,
    payload: Result<Json<SiteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SiteCreated>), ApiError> {
    let Json(site) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if let Some(field) = site.missing_field() {
        return Err(ApiError::BadRequest(format!("field '{field}' is required")));
    }

    let site = state.checker.register_endpoint(site.into_endpoint());
    Ok((
        StatusCode::CREATED,
        Json(SiteCreated {
            message: "Site added successfully",
            site,
        }),
    ))
}

async fn add_sites(
    State(state): State<AppState>,
    payload: Result<Json<Vec<SiteRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<SitesCreated>), ApiError> {
    let Json(sites) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if let Some((index, field)) = sites
        .iter()
        .enumerate()
        .find_map(|(i, site)| site.missing_field().map(|field| (i, field)))
    {
        return Err(ApiError::BadRequest(format!(
            "site {index}: field '{field}' is required"
        )));
    }

    let endpoints: Vec<Endpoint> = sites.into_iter().map(SiteRequest::into_endpoint).collect();
    let sites = state.checker.register_endpoints(endpoints);
    Ok((
        StatusCode::CREATED,
        Json(SitesCreated {
            message: "Sites added successfully",
            count: sites.len(),
            sites,
        }),
    ))
}

async fn list_sites(State(state): State<AppState>) -> Json<Vec<Endpoint>> {
    Json(state.checker.list_endpoints())
}

async fn site_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<SiteLogResponse>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LOGS_LIMIT);
    let results = state.checker.query_logs(&id, limit);

    let Some(latest) = results.last() else {
        return Err(ApiError::NotFound("No logs found for site".into()));
    };
    let site = latest.endpoint.clone();

    Ok(Json(SiteLogResponse {
        site,
        logs: results.into_iter().map(LogResponse::from).collect(),
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
