//! Collective API migration tool - Main entry point.
//!
//! Applies, reverts, and reports on the migration corpus against the
//! configured PostgreSQL database.

mod config;
mod db;
mod error;
mod migration;
mod runner;

use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;

const USAGE: &str = "usage: collective-migrate <up | down [n] | status | fresh>";

enum Command {
    Up,
    Down(u32),
    Status,
    Fresh,
}

/// Parse the command line. No flags, just a subcommand and an optional count.
fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [cmd] if cmd == "up" => Ok(Command::Up),
        [cmd] if cmd == "status" => Ok(Command::Status),
        [cmd] if cmd == "fresh" => Ok(Command::Fresh),
        [cmd] if cmd == "down" => Ok(Command::Down(1)),
        [cmd, n] if cmd == "down" => n
            .parse::<u32>()
            .map(Command::Down)
            .map_err(|_| format!("invalid revert count '{}'", n)),
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(cmd) => cmd,
        Err(msg) => {
            error!("{}", msg);
            return std::process::ExitCode::FAILURE;
        }
    };

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!("========================================");
    info!("  Collective API migrations");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("{}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Up => runner::apply_pending(&db).await,
        Command::Down(n) => runner::revert_last(&db, n).await,
        Command::Status => runner::status(&db).await,
        Command::Fresh => {
            if !config.is_development() {
                error!("'fresh' drops the whole schema and is disabled outside development");
                return std::process::ExitCode::FAILURE;
            }
            runner::fresh(&db).await
        }
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_down_with_count() {
        let args = vec!["down".to_string(), "3".to_string()];
        assert!(matches!(parse_args(&args), Ok(Command::Down(3))));
    }

    #[test]
    fn test_parse_down_defaults_to_one() {
        let args = vec!["down".to_string()];
        assert!(matches!(parse_args(&args), Ok(Command::Down(1))));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        let args = vec!["sideways".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_count() {
        let args = vec!["down".to_string(), "lots".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
