//! Question handlers: create with choices, read by id.

use crate::error::{AppError, ErrorBody};
use crate::extractors::DbSession;
use crate::models::{QuestionBase, QuestionCreated, QuestionDetail};
use crate::response::{created, ok};
use crate::service::QuestionService;
use axum::{extract::Path, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/questions/",
    request_body = QuestionBase,
    responses(
        (status = 201, description = "Question and choices stored", body = QuestionCreated),
        (status = 422, description = "Invalid question", body = ErrorBody),
    ),
    tag = "questions"
)]
pub async fn create_question(
    DbSession(mut session): DbSession,
    Json(body): Json<QuestionBase>,
) -> Result<impl IntoResponse, AppError> {
    let (question, choices) = QuestionService::create(&mut session, &body).await?;
    Ok(created(QuestionCreated::new(question, choices)))
}

#[utoipa::path(
    get,
    path = "/questions/{question_id}",
    params(("question_id" = i64, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question with its choices", body = QuestionDetail),
        (status = 404, description = "Question not found", body = ErrorBody),
    ),
    tag = "questions"
)]
pub async fn read_question(
    DbSession(mut session): DbSession,
    Path(question_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (question, choices) = QuestionService::read(&mut session, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Question".into()))?;
    Ok(ok(QuestionDetail::new(question, choices)))
}
