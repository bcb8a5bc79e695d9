//! Liveness, readiness and build info.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<Probe> {
    Json(Probe {
        status: "ok",
        store: None,
    })
}

/// 200 once the store answers a trivial query, 503 `unavailable` otherwise.
async fn ready(State(state): State<AppState>) -> Result<Json<Probe>, AppError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        AppError::Unavailable(format!("{:?} store", state.store.kind()).to_lowercase())
    })?;
    Ok(Json(Probe {
        status: "ok",
        store: Some(match state.store.kind() {
            crate::config::StoreKind::Postgres => "postgres",
            crate::config::StoreKind::Sqlite => "sqlite",
        }),
    }))
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health and GET /version; no state needed.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// [`common_routes`] plus GET /ready, which checks the store.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert!(body.store.is_none());
    }

    #[tokio::test]
    async fn version_names_the_crate() {
        let Json(info) = version().await;
        assert_eq!(info.name, "quiz-api");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
