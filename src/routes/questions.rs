//! Question routes.

use crate::handlers::questions::{create_question, read_question};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn question_routes(state: AppState) -> Router {
    Router::new()
        .route("/questions/", post(create_question))
        .route("/questions/:question_id", get(read_question))
        .with_state(state)
}
