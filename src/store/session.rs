//! Per-request store session.

use super::{postgres, sqlite};
use crate::models::{ChoiceRecord, NewChoice, QuestionRecord};
use sqlx::pool::PoolConnection;
use sqlx::{Postgres, Sqlite};

/// A pooled connection checked out for the lifetime of one request.
/// Every write runs in its own transaction and is committed before returning.
pub enum Session {
    Postgres(PoolConnection<Postgres>),
    Sqlite(PoolConnection<Sqlite>),
}

impl Session {
    pub async fn insert_question(&mut self, question_text: &str) -> Result<QuestionRecord, sqlx::Error> {
        match self {
            Session::Postgres(conn) => postgres::insert_question(conn, question_text).await,
            Session::Sqlite(conn) => sqlite::insert_question(conn, question_text).await,
        }
    }

    /// Insert all choices for one question; the result keeps input order.
    pub async fn insert_choices(
        &mut self,
        question_id: i64,
        choices: &[NewChoice],
    ) -> Result<Vec<ChoiceRecord>, sqlx::Error> {
        match self {
            Session::Postgres(conn) => postgres::insert_choices(conn, question_id, choices).await,
            Session::Sqlite(conn) => sqlite::insert_choices(conn, question_id, choices).await,
        }
    }

    pub async fn find_question(&mut self, id: i64) -> Result<Option<QuestionRecord>, sqlx::Error> {
        match self {
            Session::Postgres(conn) => postgres::find_question(conn, id).await,
            Session::Sqlite(conn) => sqlite::find_question(conn, id).await,
        }
    }

    /// Choices owned by a question, ascending by id.
    pub async fn choices_for(&mut self, question_id: i64) -> Result<Vec<ChoiceRecord>, sqlx::Error> {
        match self {
            Session::Postgres(conn) => postgres::choices_for(conn, question_id).await,
            Session::Sqlite(conn) => sqlite::choices_for(conn, question_id).await,
        }
    }

    /// Remove a question; its choices go with it. Returns false when nothing matched.
    pub async fn delete_question(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        match self {
            Session::Postgres(conn) => postgres::delete_question(conn, id).await,
            Session::Sqlite(conn) => sqlite::delete_question(conn, id).await,
        }
    }
}
