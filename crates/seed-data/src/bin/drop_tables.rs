//! Drops every table in the configured schema.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin drop-tables
//! ```
//!
//! Intended for disposable dev databases; there is no confirmation prompt.

use sqlx::{Connection, mysql::MySqlConnection};
use tracing_subscriber::EnvFilter;

use seed_data::config::DbConfig;
use seed_data::db::drop_all_tables;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DbConfig::from_env();

    let mut conn = MySqlConnection::connect_with(&config.connect_options()).await?;

    let tables = drop_all_tables(&mut conn, &config.database).await?;
    conn.close().await?;

    println!("Dropped tables: {tables:?}");
    println!("Done.");

    Ok(())
}
