//! Question create/read over one request's store session.

use crate::error::AppError;
use crate::models::{ChoiceRecord, NewChoice, QuestionBase, QuestionRecord};
use crate::service::RequestValidator;
use crate::store::Session;

pub struct QuestionService;

impl QuestionService {
    /// Insert the question and commit, then insert its choices and commit.
    /// Returned choices are in submission order.
    pub async fn create(
        session: &mut Session,
        body: &QuestionBase,
    ) -> Result<(QuestionRecord, Vec<ChoiceRecord>), AppError> {
        RequestValidator::validate_question(body)?;
        let question = session.insert_question(&body.question_text).await?;
        let new_choices: Vec<NewChoice> = body.choices.iter().map(NewChoice::from).collect();
        let choices = session.insert_choices(question.id, &new_choices).await?;
        tracing::info!(question_id = question.id, choices = choices.len(), "question created");
        Ok((question, choices))
    }

    /// Fetch a question and all of its choices. `None` when the id is unknown.
    pub async fn read(
        session: &mut Session,
        id: i64,
    ) -> Result<Option<(QuestionRecord, Vec<ChoiceRecord>)>, AppError> {
        let Some(question) = session.find_question(id).await? else {
            return Ok(None);
        };
        let choices = session.choices_for(question.id).await?;
        Ok(Some((question, choices)))
    }
}
