//! Administration routes.
//!
//! None of these check who is calling. They are only mounted by the
//! insecure variant.

use api_types::admin::ExposedConfig;
use axum::{Json, extract::State, response::Html};

use crate::{ServerError, pages, server::ServerState};

pub(crate) const SECRET_KEY: &str = "super_secret_key_123";
pub(crate) const DEFAULT_API_KEY: &str = "default_api_key";

pub(crate) async fn panel() -> Html<&'static str> {
    Html(pages::ADMIN_PANEL)
}

pub(crate) async fn delete_all(
    State(state): State<ServerState>,
) -> Result<&'static str, ServerError> {
    let deleted = state
        .store
        .delete_all()
        .await
        .map_err(|err| state.error(err))?;
    tracing::warn!("unauthenticated request deleted {deleted} users");

    Ok("All users have been deleted!")
}

/// `API_KEY` is read on every call, so changes to the environment show up
/// without a restart.
pub(crate) async fn config(State(state): State<ServerState>) -> Json<ExposedConfig> {
    Json(ExposedConfig {
        database: state.database.clone(),
        secret_key: SECRET_KEY.to_string(),
        api_key: api_key(std::env::var("API_KEY")),
        debug: state.variant.debug(),
    })
}

fn api_key(var: Result<String, std::env::VarError>) -> String {
    var.unwrap_or_else(|_| DEFAULT_API_KEY.to_string())
}
