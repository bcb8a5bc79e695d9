//! PostgreSQL backend: database bootstrap, DDL and question/choice queries.

use crate::config::Settings;
use crate::error::AppError;
use crate::models::{ChoiceRecord, NewChoice, QuestionRecord};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Connection, PgConnection, PgPool};
use std::str::FromStr;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS question (
        id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        question_text TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_question_question_text ON question (question_text)",
    r#"
    CREATE TABLE IF NOT EXISTS choices (
        id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        choice_text TEXT NOT NULL,
        is_correct BOOLEAN NOT NULL DEFAULT FALSE,
        question_id BIGINT NOT NULL REFERENCES question (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_choices_choice_text ON choices (choice_text)",
];

const INSERT_QUESTION: &str =
    "INSERT INTO question (question_text) VALUES ($1) RETURNING id, question_text";
const INSERT_CHOICE: &str = "INSERT INTO choices (choice_text, is_correct, question_id) VALUES ($1, $2, $3) \
     RETURNING id, choice_text, is_correct, question_id";
const SELECT_QUESTION: &str = "SELECT id, question_text FROM question WHERE id = $1";
const SELECT_CHOICES: &str =
    "SELECT id, choice_text, is_correct, question_id FROM choices WHERE question_id = $1 ORDER BY id";
const DELETE_QUESTION: &str = "DELETE FROM question WHERE id = $1";

pub(crate) async fn connect(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await
}

pub(crate) async fn ensure_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn: PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    conn.close().await?;
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    // No path: sqlx falls back to the user's default database, nothing to bootstrap.
    let Some(path_start) = url[authority_start..].find('/').map(|i| authority_start + i + 1) else {
        return Ok((url.to_string(), String::new()));
    };
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name.trim(), Some(query)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub(crate) async fn insert_question(
    conn: &mut PgConnection,
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
    conn: &mut PgConnection,
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
    conn: &mut PgConnection,
    id: i64,
) -> Result<Option<QuestionRecord>, sqlx::Error> {
    tracing::debug!(sql = SELECT_QUESTION, id, "query");
    sqlx::query_as::<_, QuestionRecord>(SELECT_QUESTION)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub(crate) async fn choices_for(
    conn: &mut PgConnection,
    question_id: i64,
) -> Result<Vec<ChoiceRecord>, sqlx::Error> {
    tracing::debug!(sql = SELECT_CHOICES, question_id, "query");
    sqlx::query_as::<_, ChoiceRecord>(SELECT_CHOICES)
        .bind(question_id)
        .fetch_all(&mut *conn)
        .await
}

pub(crate) async fn delete_question(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = conn.begin().await?;
    tracing::debug!(sql = DELETE_QUESTION, id, "query (tx)");
    let done = sqlx::query(DELETE_QUESTION).bind(id).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(done.rows_affected() > 0)
}
