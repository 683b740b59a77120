//! User and avatar generation.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PLACEHOLDER_IMAGE;

/// Placeholder password every generated account is given.
const PLACEHOLDER_PASSWORD: &str = "password";

/// Account roles recognized by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Donor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Donor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Donor => "donor",
            Role::Admin => "admin",
        }
    }
}

/// Generated image attachment, used for user avatars and campaign covers.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    pub alt: String,
}

impl GeneratedImage {
    pub fn avatar() -> Self {
        Self {
            url: PLACEHOLDER_IMAGE.to_string(),
            alt: "User Avatar".to_string(),
        }
    }

    pub fn cover() -> Self {
        Self {
            url: PLACEHOLDER_IMAGE.to_string(),
            alt: "Cover".to_string(),
        }
    }
}

/// Generated user data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Avatar image, attached with configurable probability.
    pub avatar: Option<GeneratedImage>,
}

/// Generates placeholder user accounts.
pub struct UserGenerator {
    avatar_probability: f64,
    password_hash: String,
}

impl UserGenerator {
    /// Creates a user generator.
    ///
    /// The placeholder password is hashed once here; argon2 is slow by
    /// design and every generated account shares the same credential.
    pub fn new(avatar_probability: f64) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(PLACEHOLDER_PASSWORD.as_bytes(), &salt)
            .expect("Failed to hash placeholder password")
            .to_string();

        Self {
            avatar_probability,
            password_hash,
        }
    }

    /// Generates a single user. `index` keeps emails distinct across the run.
    pub fn generate(&self, index: usize, rng: &mut impl Rng) -> GeneratedUser {
        let suffix: u32 = rng.gen_range(1000..10000);
        let email = format!("user{index}_{suffix}@example.com");
        let role = Role::ALL[rng.gen_range(0..Role::ALL.len())];

        let avatar = if rng.r#gen::<f64>() < self.avatar_probability {
            Some(GeneratedImage::avatar())
        } else {
            None
        };

        GeneratedUser {
            email,
            password_hash: self.password_hash.clone(),
            role,
            avatar,
        }
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }
}
