//! QuestionService: create and read questions with their choices.

mod questions;
mod validation;
pub use questions::QuestionService;
pub use validation::RequestValidator;
