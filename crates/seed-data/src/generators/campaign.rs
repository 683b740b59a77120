//! Campaign generation with metrics, donations, updates, and comments.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use super::PLACEHOLDER_IMAGE;
use super::user::GeneratedImage;

/// Campaign lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

const TITLE_VERBS: [&str; 3] = ["Help", "Support", "Fund"];
const CATEGORIES: [&str; 5] = ["Education", "Scholarship", "Tuition", "Books", "Housing"];
const CITIES: [&str; 5] = ["Paris", "Lyon", "Marseille", "Toulouse", "Nice"];
const UNIVERSITIES: [&str; 6] = [
    "Sorbonne",
    "Polytechnique",
    "Grenoble Alpes",
    "Lyon 1",
    "Marseille Aix",
    "Toulouse INP",
];
const FIELDS: [&str; 6] = [
    "Computer Science",
    "Medicine",
    "Economics",
    "Law",
    "Engineering",
    "Arts",
];
const STUDENT_YEARS: [&str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];
const UPDATE_TITLES: [&str; 3] = ["Kickoff", "Progress", "Milestone"];
const COMMENT_TEXTS: [&str; 4] = [
    "Great initiative!",
    "Happy to help.",
    "Wishing you success!",
    "Keep going!",
];

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Hank", "Ivy", "Jack",
];
const LAST_NAMES: [&str; 10] = [
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau",
];

/// Picks a full name from the fixed name pools.
pub fn random_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

/// View/share/update counters, one record per campaign.
#[derive(Debug, Clone)]
pub struct GeneratedMetrics {
    pub views: i64,
    pub shares: i64,
    pub updates: i64,
}

/// Generated donation. Donor identity is free text, not linked to a user.
#[derive(Debug, Clone)]
pub struct GeneratedDonation {
    pub donor_name: String,
    pub donor_email: String,
    pub amount: i64,
}

/// Generated campaign progress update.
#[derive(Debug, Clone)]
pub struct GeneratedUpdate {
    pub title: String,
    pub content: String,
}

/// Generated comment. `author` indexes into the run's user vector.
#[derive(Debug, Clone)]
pub struct GeneratedComment {
    pub author: usize,
    pub text: String,
}

/// Generated campaign with all of its child records.
///
/// Parent references are indices into the generated user vector; the seeder
/// resolves them to database ids after the users are inserted.
#[derive(Debug, Clone)]
pub struct GeneratedCampaign {
    pub owner: usize,
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub category: String,
    pub city: String,
    pub university: String,
    pub cover_image: String,
    pub status: CampaignStatus,
    pub created_at: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub featured: bool,
    pub student_name: String,
    pub student_avatar: String,
    pub student_university: String,
    pub student_field: String,
    pub student_year: String,
    pub cover: GeneratedImage,
    pub metrics: GeneratedMetrics,
    pub donations: Vec<GeneratedDonation>,
    pub updates: Vec<GeneratedUpdate>,
    pub comments: Vec<GeneratedComment>,
}

/// Generates campaigns with their dependent records.
pub struct CampaignGenerator {
    featured_probability: f64,
}

impl CampaignGenerator {
    pub fn new(featured_probability: f64) -> Self {
        Self {
            featured_probability,
        }
    }

    /// Generates one campaign owned by `owner`, with comment authors drawn
    /// uniformly from `0..user_count` (the owner included).
    pub fn generate(
        &self,
        owner: usize,
        user_count: usize,
        rng: &mut impl Rng,
    ) -> GeneratedCampaign {
        let now = OffsetDateTime::now_utc();

        let goal_amount = rng.gen_range(2000..=15000);
        let current_amount = rng.gen_range(0..=goal_amount);

        let verb = TITLE_VERBS[rng.gen_range(0..TITLE_VERBS.len())];
        let title = format!("{verb} {} Studies", random_name(rng));

        // No ordering between created_at and end_date; the application
        // tolerates end dates before creation.
        let created_at = now - Duration::days(rng.gen_range(0..=180));
        let end_date = now + Duration::days(rng.gen_range(15..=120));

        GeneratedCampaign {
            owner,
            title,
            description: "Help fund education for a promising student.".to_string(),
            goal_amount,
            current_amount,
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            city: CITIES[rng.gen_range(0..CITIES.len())].to_string(),
            university: UNIVERSITIES[rng.gen_range(0..UNIVERSITIES.len())].to_string(),
            cover_image: PLACEHOLDER_IMAGE.to_string(),
            status: CampaignStatus::ALL[rng.gen_range(0..CampaignStatus::ALL.len())],
            created_at,
            end_date,
            featured: rng.r#gen::<f64>() < self.featured_probability,
            student_name: random_name(rng),
            student_avatar: PLACEHOLDER_IMAGE.to_string(),
            student_university: UNIVERSITIES[rng.gen_range(0..UNIVERSITIES.len())].to_string(),
            student_field: FIELDS[rng.gen_range(0..FIELDS.len())].to_string(),
            student_year: STUDENT_YEARS[rng.gen_range(0..STUDENT_YEARS.len())].to_string(),
            cover: GeneratedImage::cover(),
            metrics: self.generate_metrics(rng),
            donations: self.generate_donations(rng),
            updates: self.generate_updates(rng),
            comments: self.generate_comments(user_count, rng),
        }
    }

    fn generate_metrics(&self, rng: &mut impl Rng) -> GeneratedMetrics {
        GeneratedMetrics {
            views: rng.gen_range(50..=5000),
            shares: rng.gen_range(5..=500),
            updates: rng.gen_range(0..=10),
        }
    }

    /// 1-3 donations with a pool-drawn donor and an email derived from it.
    fn generate_donations(&self, rng: &mut impl Rng) -> Vec<GeneratedDonation> {
        (0..rng.gen_range(1..=3))
            .map(|_| {
                let donor_name = random_name(rng);
                let donor_email = format!("{}@mail.com", donor_name.to_lowercase().replace(' ', "."));
                GeneratedDonation {
                    donor_name,
                    donor_email,
                    amount: rng.gen_range(10..=300),
                }
            })
            .collect()
    }

    /// 0-2 updates from the fixed title pool.
    fn generate_updates(&self, rng: &mut impl Rng) -> Vec<GeneratedUpdate> {
        (0..rng.gen_range(0..=2))
            .map(|_| GeneratedUpdate {
                title: UPDATE_TITLES[rng.gen_range(0..UPDATE_TITLES.len())].to_string(),
                content: "Thanks for your support!".to_string(),
            })
            .collect()
    }

    /// 0-3 comments from uniformly chosen users.
    fn generate_comments(&self, user_count: usize, rng: &mut impl Rng) -> Vec<GeneratedComment> {
        (0..rng.gen_range(0..=3))
            .map(|_| GeneratedComment {
                author: rng.gen_range(0..user_count),
                text: COMMENT_TEXTS[rng.gen_range(0..COMMENT_TEXTS.len())].to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_current_amount_within_goal() {
        let campaign_gen = CampaignGenerator::new(0.2);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let c = campaign_gen.generate(0, 5, &mut rng);
            assert!(c.current_amount >= 0);
            assert!(c.current_amount <= c.goal_amount);
            assert!((2000..=15000).contains(&c.goal_amount));
        }
    }

    #[test]
    fn test_comment_authors_in_range() {
        let campaign_gen = CampaignGenerator::new(0.2);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let c = campaign_gen.generate(3, 8, &mut rng);
            for comment in &c.comments {
                assert!(comment.author < 8);
            }
        }
    }

    #[test]
    fn test_child_record_counts() {
        let campaign_gen = CampaignGenerator::new(0.2);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let c = campaign_gen.generate(0, 5, &mut rng);
            assert!((1..=3).contains(&c.donations.len()));
            assert!(c.updates.len() <= 2);
            assert!(c.comments.len() <= 3);
        }
    }

    #[test]
    fn test_donor_email_derived_from_name() {
        let campaign_gen = CampaignGenerator::new(0.2);
        let mut rng = StdRng::seed_from_u64(11);

        let c = campaign_gen.generate(0, 5, &mut rng);
        for donation in &c.donations {
            let expected = format!(
                "{}@mail.com",
                donation.donor_name.to_lowercase().replace(' ', ".")
            );
            assert_eq!(donation.donor_email, expected);
            assert!((10..=300).contains(&donation.amount));
        }
    }

    #[test]
    fn test_end_date_window() {
        let campaign_gen = CampaignGenerator::new(0.2);
        let mut rng = StdRng::seed_from_u64(11);

        let now = OffsetDateTime::now_utc();
        for _ in 0..50 {
            let c = campaign_gen.generate(0, 5, &mut rng);
            // One-day margins absorb the clock reads between `now` and generation.
            assert!(c.end_date >= now + Duration::days(14));
            assert!(c.end_date <= now + Duration::days(121));
            assert!(c.created_at <= now + Duration::days(1));
            assert!(c.created_at >= now - Duration::days(181));
        }
    }
}
