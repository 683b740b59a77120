//! Seed and maintenance tools for the EduFund database.
//!
//! This crate provides random fixture generation (users, campaigns, donations,
//! comments, favorites) to support manual verification and demos, plus small
//! maintenance utilities: a table-dropping routine, a connectivity smoke test,
//! and an environment diagnostic.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let fixture = FixtureGenerator::new(SeedConfig::default()).generate(&mut rng);
//! Seeder::new(pool).seed(&fixture).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DbConfig, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        CampaignGenerator, FavoriteGenerator, Fixture, FixtureGenerator, UserGenerator,
    };
    pub use rand::SeedableRng;
    pub use rand::rngs::StdRng;
}
