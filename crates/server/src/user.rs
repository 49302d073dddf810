//! User listing and lookup.

use api_types::user::User;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};

use crate::{ServerError, pages, server::ServerState};

pub(crate) async fn list(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let users = state.store.users().await.map_err(|err| state.error(err))?;
    tracing::debug!("listing {} users", users.len());

    Ok(Html(pages::user_list(&users, state.variant)))
}

/// `GET /api/user/{id}`. A non-numeric id never gets here: the path
/// extractor rejects it with 400.
pub(crate) async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ServerError> {
    let user = state.store.user(id).await.map_err(|err| state.error(err))?;

    Ok(Json(User {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}
