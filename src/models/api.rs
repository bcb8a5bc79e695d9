//! Request and response bodies.

use crate::models::record::{ChoiceRecord, NewChoice, QuestionRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChoiceBase {
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Body of `POST /questions/`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuestionBase {
    pub question_text: String,
    pub choices: Vec<ChoiceBase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionOut {
    pub id: i64,
    pub question_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChoiceOut {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
}

/// Response of `POST /questions/`: choices are in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreated {
    pub question: QuestionOut,
    pub choices: Vec<ChoiceOut>,
}

/// Response of `GET /questions/{question_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDetail {
    pub id: i64,
    pub question_text: String,
    pub choices: Vec<ChoiceOut>,
}

impl From<&ChoiceBase> for NewChoice {
    fn from(c: &ChoiceBase) -> Self {
        NewChoice {
            choice_text: c.choice_text.clone(),
            is_correct: c.is_correct,
        }
    }
}

impl From<QuestionRecord> for QuestionOut {
    fn from(q: QuestionRecord) -> Self {
        QuestionOut {
            id: q.id,
            question_text: q.question_text,
        }
    }
}

impl From<ChoiceRecord> for ChoiceOut {
    fn from(c: ChoiceRecord) -> Self {
        ChoiceOut {
            id: c.id,
            choice_text: c.choice_text,
            is_correct: c.is_correct,
        }
    }
}

impl QuestionCreated {
    pub fn new(question: QuestionRecord, choices: Vec<ChoiceRecord>) -> Self {
        QuestionCreated {
            question: question.into(),
            choices: choices.into_iter().map(ChoiceOut::from).collect(),
        }
    }
}

impl QuestionDetail {
    pub fn new(question: QuestionRecord, choices: Vec<ChoiceRecord>) -> Self {
        QuestionDetail {
            id: question.id,
            question_text: question.question_text,
            choices: choices.into_iter().map(ChoiceOut::from).collect(),
        }
    }
}
