//! Schema tool for the wallet database at `DATABASE_URL`
//! (default `sqlite:./wallets.db?mode=rwc`).
//!
//! ```text
//! migration            apply pending migrations (same as `up`)
//! migration up         apply pending migrations
//! migration down [N]   roll back the last N applied migrations (default 1)
//! migration fresh      drop every table and reapply all migrations
//! migration status     list applied and pending migrations
//! ```
use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_DATABASE_URL: &str = "sqlite:./wallets.db?mode=rwc";
const USAGE: &str = "Usage: migration [up | down [N] | fresh | status]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Up,
    Down(u32),
    Fresh,
    Status,
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Up),
        [cmd] if cmd == "up" => Ok(Command::Up),
        [cmd] if cmd == "down" => Ok(Command::Down(1)),
        [cmd, steps] if cmd == "down" => match steps.parse::<u32>() {
            Ok(steps) if steps > 0 => Ok(Command::Down(steps)),
            _ => Err(format!("`down` expects a positive step count, got `{steps}`")),
        },
        [cmd] if cmd == "fresh" => Ok(Command::Fresh),
        [cmd] if cmd == "status" => Ok(Command::Status),
        _ => Err(format!("unknown command `{}`", args.join(" "))),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let db = Database::connect(&db_url).await?;

    match command {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down(steps) => migration::Migrator::down(&db, Some(steps)).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
