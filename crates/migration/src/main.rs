use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

/// Applies or inspects the `users` schema outside of the web server.
#[derive(Parser, Debug)]
#[command(name = "migration")]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:./users.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Option<Step>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Step {
    Up,
    Down,
    /// Drop everything and re-apply. Seeded users are lost.
    Fresh,
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or(Step::Up) {
        Step::Up => migration::Migrator::up(&db, None).await?,
        Step::Down => migration::Migrator::down(&db, None).await?,
        Step::Fresh => migration::Migrator::fresh(&db).await?,
        Step::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
