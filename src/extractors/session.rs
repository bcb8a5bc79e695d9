//! Check out a store session for the duration of one request.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::Session;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Store session owned by the handler. Dropping it (on success, error or
/// cancellation alike) hands the connection back to the pool.
pub struct DbSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.store.session().await?;
        Ok(DbSession(session))
    }
}
