//! Whole-fixture generation: users, campaigns, and favorites in one pass.

use rand::Rng;

use crate::config::SeedConfig;

use super::campaign::{CampaignGenerator, GeneratedCampaign};
use super::favorite::{FavoriteGenerator, GeneratedFavorite};
use super::user::{GeneratedUser, UserGenerator};

/// A complete generated data set, ready for the seeder.
///
/// All parent references are indices: `campaigns[i].owner` and
/// `favorites[j].user` point into `users`, `favorites[j].campaign` into
/// `campaigns`. The seeder inserts users first, then campaigns, then
/// favorites, so every persisted child row references an existing parent id.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub users: Vec<GeneratedUser>,
    pub campaigns: Vec<GeneratedCampaign>,
    pub favorites: Vec<GeneratedFavorite>,
}

/// Generates a self-consistent random fixture from a [`SeedConfig`].
pub struct FixtureGenerator {
    config: SeedConfig,
}

impl FixtureGenerator {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Generates the full fixture. All data-shaping randomness comes from
    /// `rng`, so a seeded rng reproduces the same data set; only the argon2
    /// salt is drawn from the OS.
    pub fn generate(&self, rng: &mut impl Rng) -> Fixture {
        let user_gen = UserGenerator::new(self.config.avatar_probability);
        let users = user_gen.generate_batch(self.config.user_count, rng);

        let campaign_gen = CampaignGenerator::new(self.config.featured_probability);
        let mut campaigns = Vec::new();
        for owner in 0..users.len() {
            let campaign_count = rng.gen_range(0..=self.config.max_campaigns_per_user);
            for _ in 0..campaign_count {
                campaigns.push(campaign_gen.generate(owner, users.len(), rng));
            }
        }

        let favorites = FavoriteGenerator::new().generate(users.len(), campaigns.len(), rng);

        Fixture {
            users,
            campaigns,
            favorites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(user_count: usize, max_campaigns_per_user: usize) -> SeedConfig {
        SeedConfig {
            user_count,
            max_campaigns_per_user,
            ..SeedConfig::default()
        }
    }

    #[test]
    fn test_zero_users_yields_empty_fixture() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixture = FixtureGenerator::new(config(0, 3)).generate(&mut rng);

        assert!(fixture.users.is_empty());
        assert!(fixture.campaigns.is_empty());
        assert!(fixture.favorites.is_empty());
    }

    #[test]
    fn test_zero_campaigns_per_user() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixture = FixtureGenerator::new(config(5, 0)).generate(&mut rng);

        assert_eq!(fixture.users.len(), 5);
        assert!(fixture.campaigns.is_empty());
        assert!(fixture.favorites.is_empty());
    }

    #[test]
    fn test_parent_indices_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixture = FixtureGenerator::new(config(20, 3)).generate(&mut rng);

        for campaign in &fixture.campaigns {
            assert!(campaign.owner < fixture.users.len());
            for comment in &campaign.comments {
                assert!(comment.author < fixture.users.len());
            }
        }
        for favorite in &fixture.favorites {
            assert!(favorite.user < fixture.users.len());
            assert!(favorite.campaign < fixture.campaigns.len());
        }
    }

    #[test]
    fn test_campaigns_per_user_bounded() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixture = FixtureGenerator::new(config(10, 3)).generate(&mut rng);

        for owner in 0..fixture.users.len() {
            let owned = fixture.campaigns.iter().filter(|c| c.owner == owner).count();
            assert!(owned <= 3);
        }
    }
}
