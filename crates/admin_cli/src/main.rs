//! Out-of-band maintenance for the demo store.
//!
//! The web application never creates users, so rows are seeded from here.

use std::error::Error;

use clap::{Args, Parser, Subcommand};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use store::Store;

#[derive(Parser, Debug)]
#[command(name = "leaky_admin")]
#[command(about = "Admin utilities for leaky (seed and inspect users)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:./users.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
    /// Insert a few demo users.
    Seed,
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
}

const DEMO_USERS: [(&str, &str); 3] = [
    ("alice", "alice@example.com"),
    ("bob", "bob@example.com"),
    ("charlie", "charlie@example.com"),
];

async fn connect_db(database_url: &str) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let store = Store::builder().database(db).build()?;

    match cli.command {
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            let user = store.create_user(&args.username, &args.email).await?;
            println!("created user: {} ({})", user.username, user.id);
        }
        Command::User(User {
            command: UserCommand::List,
        }) => {
            for user in store.users().await? {
                println!("{} - {} - {}", user.id, user.username, user.email);
            }
        }
        Command::Seed => {
            for (username, email) in DEMO_USERS {
                let user = store.create_user(username, email).await?;
                println!("created user: {} ({})", user.username, user.id);
            }
        }
    }

    Ok(())
}
