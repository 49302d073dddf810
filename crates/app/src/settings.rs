//! Handles settings for the application.
//!
//! Values come from an optional `settings.toml` next to the binary, then from
//! `LEAKY_`-prefixed environment variables (`LEAKY_SERVER__PORT=8080`).
//! Anything left unset falls back to the defaults below.
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use server::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
        }
    }

    /// Human-facing name of the store.
    pub fn label(&self) -> String {
        match self {
            Database::Memory => String::from(":memory:"),
            Database::Sqlite(path) => path.clone(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Database::Sqlite(String::from("users.db"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
    pub variant: Variant,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: String::from("0.0.0.0"),
            port: 5000,
            database: Database::default(),
            variant: Variant::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("settings").required(false))
                .add_source(
                    Environment::with_prefix("LEAKY")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Log level for the workspace crates. Debug diagnostics force `debug`.
    pub fn level(&self) -> &str {
        if self.server.variant.debug() {
            "debug"
        } else {
            &self.app.level
        }
    }
}
