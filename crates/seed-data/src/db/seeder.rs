//! Database seeding for generated fixtures.

use sqlx::MySqlPool;
use thiserror::Error;
use tracing::info;

use crate::generators::{Fixture, GeneratedCampaign, GeneratedFavorite, GeneratedUser};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Fixture references an unknown parent index")]
    BadParentIndex,
}

/// Per-table row counts, queried after seeding.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SeedSummary {
    pub users: i64,
    pub campaigns: i64,
    pub donations: i64,
    pub comments: i64,
    pub updates: i64,
    pub favorites: i64,
}

/// Inserts generated fixtures into the database.
///
/// Transactional units: all users in one transaction, all avatars in one,
/// each campaign together with its child rows in one, all favorites in one.
/// A failure aborts the run and leaves earlier committed units in place;
/// a campaign is never visible without its children.
pub struct Seeder {
    pool: MySqlPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Seeds a complete fixture, parents before children.
    pub async fn seed(&self, fixture: &Fixture) -> Result<(), SeedError> {
        let user_ids = self.seed_users(&fixture.users).await?;
        self.seed_avatars(&fixture.users, &user_ids).await?;
        let campaign_ids = self.seed_campaigns(&fixture.campaigns, &user_ids).await?;
        self.seed_favorites(&fixture.favorites, &user_ids, &campaign_ids)
            .await?;
        Ok(())
    }

    /// Seeds users and returns their database ids in generation order.
    pub async fn seed_users(&self, users: &[GeneratedUser]) -> Result<Vec<u64>, SeedError> {
        info!("Seeding {} users...", users.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(users.len());

        for user in users {
            let result = sqlx::query(
                r#"
                INSERT INTO users (email, password_hash, role)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .execute(&mut *tx)
            .await?;

            ids.push(result.last_insert_id());
        }

        tx.commit().await?;

        info!("Seeded {} users", ids.len());
        Ok(ids)
    }

    /// Seeds avatar images for the users that have one.
    pub async fn seed_avatars(
        &self,
        users: &[GeneratedUser],
        user_ids: &[u64],
    ) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0usize;

        for (user, &user_id) in users.iter().zip(user_ids) {
            if let Some(avatar) = &user.avatar {
                sqlx::query(
                    r#"
                    INSERT INTO images (url, alt, user_id)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(&avatar.url)
                .bind(&avatar.alt)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
                count += 1;
            }
        }

        tx.commit().await?;

        info!("Seeded {count} avatars");
        Ok(())
    }

    /// Seeds campaigns and returns their database ids in generation order.
    ///
    /// Each campaign and all of its child rows commit as one unit.
    pub async fn seed_campaigns(
        &self,
        campaigns: &[GeneratedCampaign],
        user_ids: &[u64],
    ) -> Result<Vec<u64>, SeedError> {
        info!("Seeding {} campaigns...", campaigns.len());

        let mut ids = Vec::with_capacity(campaigns.len());

        for campaign in campaigns {
            ids.push(self.insert_campaign(campaign, user_ids).await?);
        }

        info!("Seeded {} campaigns", ids.len());
        Ok(ids)
    }

    /// Inserts a single campaign with its cover, metrics, donations,
    /// updates, and comments in one transaction.
    async fn insert_campaign(
        &self,
        campaign: &GeneratedCampaign,
        user_ids: &[u64],
    ) -> Result<u64, SeedError> {
        let owner_id = *user_ids
            .get(campaign.owner)
            .ok_or(SeedError::BadParentIndex)?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO campaigns (
                user_id, title, description, goal_amount, current_amount,
                category, city, university, cover_image, status,
                created_at, end_date, featured,
                student_name, student_avatar, student_university,
                student_field, student_year
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner_id)
        .bind(&campaign.title)
        .bind(&campaign.description)
        .bind(campaign.goal_amount)
        .bind(campaign.current_amount)
        .bind(&campaign.category)
        .bind(&campaign.city)
        .bind(&campaign.university)
        .bind(&campaign.cover_image)
        .bind(campaign.status.as_str())
        .bind(campaign.created_at)
        .bind(campaign.end_date)
        .bind(campaign.featured)
        .bind(&campaign.student_name)
        .bind(&campaign.student_avatar)
        .bind(&campaign.student_university)
        .bind(&campaign.student_field)
        .bind(&campaign.student_year)
        .execute(&mut *tx)
        .await?;

        let campaign_id = result.last_insert_id();

        sqlx::query(
            r#"
            INSERT INTO images (url, alt, campaign_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&campaign.cover.url)
        .bind(&campaign.cover.alt)
        .bind(campaign_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO campaign_metrics (campaign_id, views, shares, updates)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(campaign_id)
        .bind(campaign.metrics.views)
        .bind(campaign.metrics.shares)
        .bind(campaign.metrics.updates)
        .execute(&mut *tx)
        .await?;

        for donation in &campaign.donations {
            sqlx::query(
                r#"
                INSERT INTO donations (campaign_id, amount, donor_name, donor_email)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(campaign_id)
            .bind(donation.amount)
            .bind(&donation.donor_name)
            .bind(&donation.donor_email)
            .execute(&mut *tx)
            .await?;
        }

        for update in &campaign.updates {
            sqlx::query(
                r#"
                INSERT INTO campaign_updates (campaign_id, title, content)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(campaign_id)
            .bind(&update.title)
            .bind(&update.content)
            .execute(&mut *tx)
            .await?;
        }

        for comment in &campaign.comments {
            let author_id = *user_ids
                .get(comment.author)
                .ok_or(SeedError::BadParentIndex)?;

            sqlx::query(
                r#"
                INSERT INTO campaign_comments (campaign_id, user_id, comment)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(campaign_id)
            .bind(author_id)
            .bind(&comment.text)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(campaign_id)
    }

    /// Seeds favorite links. Pairs are already deduplicated by the generator.
    pub async fn seed_favorites(
        &self,
        favorites: &[GeneratedFavorite],
        user_ids: &[u64],
        campaign_ids: &[u64],
    ) -> Result<(), SeedError> {
        info!("Seeding {} favorites...", favorites.len());

        let mut tx = self.pool.begin().await?;

        for favorite in favorites {
            let user_id = *user_ids.get(favorite.user).ok_or(SeedError::BadParentIndex)?;
            let campaign_id = *campaign_ids
                .get(favorite.campaign)
                .ok_or(SeedError::BadParentIndex)?;

            sqlx::query(
                r#"
                INSERT INTO favorites (user_id, campaign_id)
                VALUES (?, ?)
                "#,
            )
            .bind(user_id)
            .bind(campaign_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!("Seeded {} favorites", favorites.len());
        Ok(())
    }

    /// Queries per-table row counts for the end-of-run report.
    pub async fn count_summary(&self) -> Result<SeedSummary, SeedError> {
        Ok(SeedSummary {
            users: self.count("users").await?,
            campaigns: self.count("campaigns").await?,
            donations: self.count("donations").await?,
            comments: self.count("campaign_comments").await?,
            updates: self.count("campaign_updates").await?,
            favorites: self.count("favorites").await?,
        })
    }

    async fn count(&self, table: &str) -> Result<i64, SeedError> {
        // Table names come from the fixed list above, never from input.
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
