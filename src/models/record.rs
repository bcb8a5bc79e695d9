//! Rows of the `question` and `choices` tables.
//!
//! A choice always belongs to exactly one question; removing the question
//! removes its choices (`ON DELETE CASCADE`).

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct QuestionRecord {
    pub id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ChoiceRecord {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i64,
}

/// A choice not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub choice_text: String,
    pub is_correct: bool,
}
