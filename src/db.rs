//! Database connection establishment.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Open a SeaORM connection to the target PostgreSQL database.
///
/// The migration runner is strictly sequential, so a small pool is enough;
/// concurrent runners against the same database are unsafe and must be
/// serialized externally (e.g. by the deployment pipeline).
pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(&config.database_url);
    opts.max_connections(2)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect: {}", e)))?;

    info!("Database connection established");
    Ok(db)
}
