//! Quiz API: questions with answer choices over HTTP, stored in PostgreSQL or SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use openapi::{openapi_routes, ApiDoc};
pub use routes::{common_routes, common_routes_with_ready, question_routes};
pub use service::QuestionService;
pub use state::AppState;
pub use store::{Session, Store};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: probes, question endpoints and the API document,
/// with request tracing and a request body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(question_routes(state))
        .merge(openapi_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
