use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    /// A user as returned by `GET /api/user/{id}`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: i64,
        pub username: String,
        pub email: String,
    }
}

pub mod search {
    use super::*;

    /// Query string of `GET /search_result`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SearchQuery {
        pub username: String,
    }
}

pub mod admin {
    use super::*;

    /// Body of `GET /admin/config`.
    ///
    /// Everything in here is meant to stay private; the route that serves it
    /// is one of the demonstrated flaws.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExposedConfig {
        pub database: String,
        pub secret_key: String,
        pub api_key: String,
        pub debug: bool,
    }
}

/// JSON error body shared by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
