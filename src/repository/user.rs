use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "mocks"))]
impl User {
    pub fn mock() -> Self {
        Self::mock_from_credentials("kody", "fakehashedpassword")
    }

    pub fn mock_from_credentials(username: &str, password_hash: &str) -> Self {
        let now = Utc::now();
        User {
            id: ulid::Ulid::new().to_string(),
            username: username.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait UserRepository {
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
}
