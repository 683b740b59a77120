//! Prints the resolved `DB_*` environment variables.
//!
//! Absent variables print as "NOT SET"; this never fails.

use seed_data::config::env_report;

fn main() {
    dotenvy::dotenv().ok();

    println!("Environment Variables:");
    for (name, value) in env_report() {
        println!("{name}: {}", value.as_deref().unwrap_or("NOT SET"));
    }
}
