//! Database integration: seeding, maintenance, and diagnostics.

pub mod diagnostics;
pub mod maintenance;
mod seeder;

pub use diagnostics::{CONNECTION_CHECKLIST, ConnectionReport, connection_report};
pub use maintenance::{drop_all_tables, drop_statements};
pub use seeder::{SeedError, SeedSummary, Seeder};
