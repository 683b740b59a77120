//! Random seed script - populates the database with demo users and campaigns.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed [user_count] [max_campaigns_per_user]
//! ```
//!
//! Defaults to 20 users and up to 3 campaigns each. Set `SEED` to make a
//! run reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::EnvFilter;

use seed_data::config::{DbConfig, SeedConfig};
use seed_data::db::Seeder;
use seed_data::generators::FixtureGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = SeedConfig::default();
    let args: Vec<String> = std::env::args().collect();
    if let Some(count) = args.get(1) {
        config.user_count = count.parse()?;
    }
    if let Some(max) = args.get(2) {
        config.max_campaigns_per_user = max.parse()?;
    }

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect_with(DbConfig::from_env().connect_options())
        .await?;

    tracing::info!("Connected to database");

    let mut rng = match std::env::var("SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse()?),
        Err(_) => StdRng::from_entropy(),
    };

    let fixture = FixtureGenerator::new(config).generate(&mut rng);

    let seeder = Seeder::new(pool);
    seeder.seed(&fixture).await?;

    let summary = seeder.count_summary().await?;

    tracing::info!("Random seeding completed");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
