//! SQLite backend for local runs and tests.

use crate::config::Settings;
use crate::models::{ChoiceRecord, NewChoice, QuestionRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, SqliteConnection, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

// AUTOINCREMENT keeps ids strictly increasing, even after deletes.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS question (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_text TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_question_question_text ON question (question_text)",
    r#"
    CREATE TABLE IF NOT EXISTS choices (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        choice_text TEXT NOT NULL,
        is_correct BOOLEAN NOT NULL DEFAULT 0,
        question_id INTEGER NOT NULL REFERENCES question (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_choices_choice_text ON choices (choice_text)",
];

const INSERT_QUESTION: &str =
    "INSERT INTO question (question_text) VALUES (?) RETURNING id, question_text";
const INSERT_CHOICE: &str = "INSERT INTO choices (choice_text, is_correct, question_id) VALUES (?, ?, ?) \
     RETURNING id, choice_text, is_correct, question_id";
const SELECT_QUESTION: &str = "SELECT id, question_text FROM question WHERE id = ?";
const SELECT_CHOICES: &str =
    "SELECT id, choice_text, is_correct, question_id FROM choices WHERE question_id = ? ORDER BY id";
const DELETE_QUESTION: &str = "DELETE FROM question WHERE id = ?";

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open the pool. An in-memory database lives only as long as its connection,
/// so it gets a single connection that is never recycled.
pub(crate) async fn connect(settings: &Settings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_options = if is_in_memory(&settings.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    };
    pool_options.connect_with(options).await
}

pub(crate) async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

pub(crate) async fn insert_question(
    conn: &mut SqliteConnection,
    question_text: &str,
) -> Result<QuestionRecord, sqlx::Error> {
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = INSERT_QUESTION, question_text, "query (tx)");
    let row = sqlx::query_as::<_, QuestionRecord>(INSERT_QUESTION)
        .bind(question_text)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(row)
}

pub(crate) async fn insert_choices(
    conn: &mut SqliteConnection,
    question_id: i64,
    choices: &[NewChoice],
) -> Result<Vec<ChoiceRecord>, sqlx::Error> {
    let mut out = Vec::with_capacity(choices.len());
    let mut tx = conn.begin().await?;
    for choice in choices {
        tracing::debug!(sql = INSERT_CHOICE, question_id, choice = ?choice, "query (tx)");
        let row = sqlx::query_as::<_, ChoiceRecord>(INSERT_CHOICE)
            .bind(&choice.choice_text)
            .bind(choice.is_correct)
            .bind(question_id)
            .fetch_one(&mut *tx)
            .await?;
        out.push(row);
    }
    tx.commit().await?;
    Ok(out)
}

pub(crate) async fn find_question(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<QuestionRecord>, sqlx::Error> {
    tracing::debug!(sql = SELECT_QUESTION, id, "query");
    sqlx::query_as::<_, QuestionRecord>(SELECT_QUESTION)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub(crate) async fn choices_for(
    conn: &mut SqliteConnection,
    question_id: i64,
) -> Result<Vec<ChoiceRecord>, sqlx::Error> {
    tracing::debug!(sql = SELECT_CHOICES, question_id, "query");
    sqlx::query_as::<_, ChoiceRecord>(SELECT_CHOICES)
        .bind(question_id)
        .fetch_all(&mut *conn)
        .await
}

pub(crate) async fn delete_question(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = DELETE_QUESTION, id, "query (tx)");
    let done = sqlx::query(DELETE_QUESTION).bind(id).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(done.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        let settings = Settings {
            database_url: "sqlite::memory:".into(),
            ..Settings::default()
        };
        let pool = connect(&settings).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        pool
    }

    fn choice(text: &str, is_correct: bool) -> NewChoice {
        NewChoice {
            choice_text: text.into(),
            is_correct,
        }
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:quiz?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://questions.db"));
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = memory_pool().await;
        ensure_tables(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn deleting_a_question_cascades_to_choices() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let q = insert_question(&mut conn, "Primary colors?").await.unwrap();
        let stored = insert_choices(&mut conn, q.id, &[choice("Red", true), choice("Green", false)])
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);

        assert!(delete_question(&mut conn, q.id).await.unwrap());
        assert!(find_question(&mut conn, q.id).await.unwrap().is_none());
        assert!(choices_for(&mut conn, q.id).await.unwrap().is_empty());
        let (left,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM choices")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(left, 0);
        assert!(!delete_question(&mut conn, q.id).await.unwrap());
    }

    #[tokio::test]
    async fn choice_requires_existing_question() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let err = insert_choices(&mut conn, 4242, &[choice("Orphan", false)]).await;
        assert!(err.is_err());
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM choices")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn ids_keep_increasing_after_delete() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let first = insert_question(&mut conn, "one").await.unwrap();
        delete_question(&mut conn, first.id).await.unwrap();
        let second = insert_question(&mut conn, "two").await.unwrap();
        assert!(second.id > first.id);
    }
}
