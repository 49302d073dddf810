use migration::{Migrator, MigratorTrait};
use server::ServerState;
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "leaky={level},server={level},store={level},tower_http={level}",
            level = settings.level()
        ))
        .init();

    let http = settings.server;
    tracing::info!("Starting {:?} variant...", http.variant);

    let db = match connect(&http.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };
    let store = store::Store::builder().database(db).build()?;

    let addr = format!("{}:{}", http.bind, http.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    let state = ServerState::new(store, http.variant, http.database.label());
    if let Err(err) = server::run_with_listener(state, listener).await {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}

/// Open the store and create the `users` table if it is missing. Runs once,
/// before the listener accepts anything.
async fn connect(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(config.url()).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
