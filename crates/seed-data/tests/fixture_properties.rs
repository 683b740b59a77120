//! Whole-fixture properties, checked on seeded runs so failures reproduce.

use std::collections::HashSet;

use seed_data::config::SeedConfig;
use seed_data::generators::FixtureGenerator;
use seed_data::prelude::{SeedableRng, StdRng};

fn generate(user_count: usize, max_campaigns_per_user: usize, seed: u64) -> seed_data::generators::Fixture {
    let config = SeedConfig {
        user_count,
        max_campaigns_per_user,
        ..SeedConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    FixtureGenerator::new(config).generate(&mut rng)
}

#[test]
fn current_amount_never_exceeds_goal() {
    for seed in 0..5 {
        let fixture = generate(20, 3, seed);
        for campaign in &fixture.campaigns {
            assert!(campaign.current_amount >= 0);
            assert!(campaign.current_amount <= campaign.goal_amount);
        }
    }
}

#[test]
fn favorites_are_unique_per_run() {
    for seed in 0..5 {
        let fixture = generate(20, 3, seed);
        let pairs: HashSet<_> = fixture
            .favorites
            .iter()
            .map(|f| (f.user, f.campaign))
            .collect();
        assert_eq!(pairs.len(), fixture.favorites.len());
    }
}

#[test]
fn every_child_references_a_valid_parent() {
    let fixture = generate(25, 3, 99);

    for campaign in &fixture.campaigns {
        assert!(campaign.owner < fixture.users.len());
        for comment in &campaign.comments {
            assert!(comment.author < fixture.users.len());
        }
        // Metrics and cover are owned one-to-one by construction.
        assert!(!campaign.donations.is_empty());
    }

    for favorite in &fixture.favorites {
        assert!(favorite.user < fixture.users.len());
        assert!(favorite.campaign < fixture.campaigns.len());
    }
}

#[test]
fn zero_users_produces_nothing() {
    let fixture = generate(0, 3, 1);
    assert!(fixture.users.is_empty());
    assert!(fixture.campaigns.is_empty());
    assert!(fixture.favorites.is_empty());
}

#[test]
fn zero_campaigns_per_user_produces_only_users() {
    let fixture = generate(5, 0, 1);
    assert_eq!(fixture.users.len(), 5);
    assert!(fixture.campaigns.is_empty());
    assert!(fixture.favorites.is_empty());
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = generate(10, 2, 42);
    let b = generate(10, 2, 42);

    assert_eq!(a.users.len(), b.users.len());
    assert_eq!(a.campaigns.len(), b.campaigns.len());
    assert_eq!(a.favorites.len(), b.favorites.len());

    for (x, y) in a.campaigns.iter().zip(&b.campaigns) {
        assert_eq!(x.title, y.title);
        assert_eq!(x.goal_amount, y.goal_amount);
        assert_eq!(x.current_amount, y.current_amount);
        assert_eq!(x.status, y.status);
    }
    for (x, y) in a.users.iter().zip(&b.users) {
        assert_eq!(x.email, y.email);
        assert_eq!(x.role, y.role);
    }
}
