use std::{borrow::Cow, sync::Arc};

use axum::{Router, routing::get};
use serde::Deserialize;
use store::{Binding, Store, StoreError};
use tower_http::trace::TraceLayer;

use crate::{ServerError, admin, pages, search, user};

/// Which flavour of the application is served.
///
/// `Insecure` keeps every demonstrated flaw: injectable search, unescaped
/// output, unauthenticated admin routes and debug diagnostics. `Secure`
/// binds the search term, escapes output, drops the admin routes and turns
/// debug diagnostics off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Insecure,
    #[default]
    Secure,
}

impl Variant {
    pub fn debug(self) -> bool {
        matches!(self, Self::Insecure)
    }

    pub fn binding(self) -> Binding {
        match self {
            Self::Insecure => Binding::Interpolated,
            Self::Secure => Binding::Parameterized,
        }
    }

    pub fn exposes_admin(self) -> bool {
        matches!(self, Self::Insecure)
    }

    /// Prepare untrusted text for interpolation into markup.
    pub(crate) fn render(self, raw: &str) -> Cow<'_, str> {
        match self {
            Self::Insecure => Cow::Borrowed(raw),
            Self::Secure => pages::escape_html(raw),
        }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<Store>,
    pub variant: Variant,
    /// Where the store lives, as reported by `/admin/config`.
    pub database: String,
}

impl ServerState {
    pub fn new(store: Store, variant: Variant, database: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            variant,
            database: database.into(),
        }
    }

    pub(crate) fn error(&self, err: StoreError) -> ServerError {
        if self.variant.debug() {
            ServerError::Debug(err)
        } else {
            ServerError::Store(err)
        }
    }
}

pub fn router(state: ServerState) -> Router {
    let variant = state.variant;

    let mut router = Router::new()
        .route("/", get(pages::home))
        .route("/users", get(user::list))
        .route("/search", get(pages::search_form))
        .route("/search_result", get(search::result))
        .route("/api/user/{id}", get(user::get));

    if variant.exposes_admin() {
        router = router
            .route("/admin", get(admin::panel))
            .route("/admin/delete_all", get(admin::delete_all))
            .route("/admin/config", get(admin::config));
    }

    let router = router.with_state(state);
    if variant.debug() {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {} ({:?} variant)", addr, state.variant);

    if state.variant.debug() {
        tracing::warn!("debug diagnostics enabled: do not expose this instance");
    }

    axum::serve(listener, router(state)).await
}
