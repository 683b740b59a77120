//! Favorite (user bookmarks campaign) link generation.

use std::collections::HashSet;

use rand::Rng;

/// Cap on favorite attempts per run.
const MAX_FAVORITE_ATTEMPTS: usize = 100;

/// Generated favorite link. Both fields index into the run's vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratedFavorite {
    pub user: usize,
    pub campaign: usize,
}

/// Generates deduplicated user-campaign favorite links.
pub struct FavoriteGenerator;

impl FavoriteGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Attempts up to `min(100, users * max(1, campaigns))` random pairs,
    /// skipping any pair already drawn in this run.
    pub fn generate(
        &self,
        user_count: usize,
        campaign_count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedFavorite> {
        if user_count == 0 || campaign_count == 0 {
            return Vec::new();
        }

        let attempts = MAX_FAVORITE_ATTEMPTS.min(user_count * campaign_count.max(1));

        let mut seen = HashSet::new();
        let mut favorites = Vec::new();

        for _ in 0..attempts {
            let favorite = GeneratedFavorite {
                user: rng.gen_range(0..user_count),
                campaign: rng.gen_range(0..campaign_count),
            };
            if seen.insert(favorite) {
                favorites.push(favorite);
            }
        }

        favorites
    }
}

impl Default for FavoriteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_no_duplicate_pairs() {
        let favorite_gen = FavoriteGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let favorites = favorite_gen.generate(10, 8, &mut rng);

        let unique: HashSet<_> = favorites.iter().copied().collect();
        assert_eq!(unique.len(), favorites.len());
    }

    #[test]
    fn test_indices_in_range() {
        let favorite_gen = FavoriteGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        for favorite in favorite_gen.generate(10, 8, &mut rng) {
            assert!(favorite.user < 10);
            assert!(favorite.campaign < 8);
        }
    }

    #[test]
    fn test_attempt_cap() {
        let favorite_gen = FavoriteGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        // 50 users x 50 campaigns exceeds the cap; never more than 100 links.
        let favorites = favorite_gen.generate(50, 50, &mut rng);
        assert!(favorites.len() <= 100);
    }

    #[test]
    fn test_empty_inputs() {
        let favorite_gen = FavoriteGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(favorite_gen.generate(0, 5, &mut rng).is_empty());
        assert!(favorite_gen.generate(5, 0, &mut rng).is_empty());
    }
}
