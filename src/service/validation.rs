//! Request validation beyond what the JSON shape already guarantees.

use crate::error::AppError;
use crate::models::QuestionBase;

pub struct RequestValidator;

impl RequestValidator {
    /// `question_text` must not be the empty string; whitespace is kept as given.
    /// Choice text is free-form; an empty choice list is accepted.
    pub fn validate_question(body: &QuestionBase) -> Result<(), AppError> {
        if body.question_text.is_empty() {
            return Err(AppError::Validation("question_text must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChoiceBase;

    fn body(text: &str, choices: Vec<ChoiceBase>) -> QuestionBase {
        QuestionBase {
            question_text: text.into(),
            choices,
        }
    }

    #[test]
    fn empty_question_text_is_rejected() {
        let err = RequestValidator::validate_question(&body("", vec![])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn whitespace_question_text_is_accepted() {
        assert!(RequestValidator::validate_question(&body(" ", vec![])).is_ok());
        assert!(RequestValidator::validate_question(&body("\t", vec![])).is_ok());
    }

    #[test]
    fn empty_choice_text_is_allowed() {
        let choices = vec![ChoiceBase {
            choice_text: String::new(),
            is_correct: false,
        }];
        assert!(RequestValidator::validate_question(&body("Pick one", choices)).is_ok());
    }
}
