//! OpenAPI document for the question endpoints, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::questions;
use crate::models::{ChoiceBase, ChoiceOut, QuestionBase, QuestionCreated, QuestionDetail, QuestionOut};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(questions::create_question, questions::read_question),
    components(schemas(
        ChoiceBase,
        QuestionBase,
        ChoiceOut,
        QuestionOut,
        QuestionCreated,
        QuestionDetail,
        ErrorBody,
        ErrorDetail
    )),
    tags((name = "questions", description = "Questions and their answer choices"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_question_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/questions/"));
        assert!(doc.paths.paths.contains_key("/questions/{question_id}"));
    }
}
