use api_types::search::SearchQuery;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{ServerError, pages, server::ServerState};

/// `GET /search_result?username=...`. The term is echoed into the page title
/// and reaches SQL according to the variant's binding.
pub(crate) async fn result(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ServerError> {
    let binding = state.variant.binding();
    tracing::debug!("search for {:?} ({binding:?})", query.username);

    let users = state
        .store
        .search_users(&query.username, binding)
        .await
        .map_err(|err| state.error(err))?;

    Ok(Html(pages::search_results(
        &query.username,
        &users,
        state.variant,
    )))
}
