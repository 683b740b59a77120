//! Entity generators for random fixtures.
//!
//! Generators take an injected `rand::Rng` and produce plain data structs,
//! so seeded runs are reproducible and properties are testable without a
//! database.
//!
//! - [`UserGenerator`]: accounts with roles and optional avatars
//! - [`CampaignGenerator`]: campaigns with metrics, donations, updates, comments
//! - [`FavoriteGenerator`]: deduplicated user-campaign bookmark links
//! - [`FixtureGenerator`]: the whole graph in one call

pub mod campaign;
pub mod favorite;
pub mod fixture;
pub mod user;

/// Placeholder asset used for every generated image reference.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/Untitled.png";

pub use campaign::{
    CampaignGenerator, CampaignStatus, GeneratedCampaign, GeneratedComment, GeneratedDonation,
    GeneratedMetrics, GeneratedUpdate,
};
pub use favorite::{FavoriteGenerator, GeneratedFavorite};
pub use fixture::{Fixture, FixtureGenerator};
pub use user::{GeneratedImage, GeneratedUser, Role, UserGenerator};
