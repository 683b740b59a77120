//! Connectivity smoke test.
//!
//! Connects with the `DB_*` settings, reports the server version and user
//! count, and prints a troubleshooting checklist if the server cannot be
//! reached. Failures after connecting are reported generically.

use sqlx::{Connection, mysql::MySqlConnection};

use seed_data::config::DbConfig;
use seed_data::db::{CONNECTION_CHECKLIST, connection_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = DbConfig::from_env();

    println!("Attempting to connect to MySQL...");
    println!("Host: {}", config.host);
    println!("Port: {}", config.port);
    println!("User: {}", config.user);
    println!("Database: {}\n", config.database);

    match MySqlConnection::connect_with(&config.connect_options()).await {
        Ok(mut conn) => {
            println!("[SUCCESS] Connected to MySQL!");

            match connection_report(&mut conn).await {
                Ok(report) => {
                    println!("MySQL Version: {}", report.server_version);
                    println!("Users in database: {}", report.user_count);
                    conn.close().await?;
                    println!("\n[SUCCESS] All tests passed!");
                }
                Err(err) => {
                    println!("\n[ERROR] Unexpected error: {err}");
                }
            }
        }
        Err(err) => {
            println!("\n[ERROR] Connection failed: {err}");
            println!("\nPossible solutions:");
            for line in CONNECTION_CHECKLIST {
                println!("{line}");
            }
        }
    }

    Ok(())
}
