use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub name: String,
    pub content: String,
    pub jokester_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Joke {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.jokester_id == user_id
    }
}

/// Joke id and name, enough for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeSummary {
    pub id: String,
    pub name: String,
}

#[cfg(any(test, feature = "mocks"))]
impl Joke {
    pub fn mock() -> Self {
        Self::mock_for_user("user-1")
    }

    pub fn mock_for_user(jokester_id: &str) -> Self {
        Self::mock_from_parts(
            "Road worker",
            "I never wanted to believe that my Dad was stealing from his job as a road worker. But when I got home, all the signs were there.",
            jokester_id,
        )
    }

    pub fn mock_from_parts(name: &str, content: &str, jokester_id: &str) -> Self {
        let now = Utc::now();
        Joke {
            id: ulid::Ulid::new().to_string(),
            name: name.to_owned(),
            content: content.to_owned(),
            jokester_id: jokester_id.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait JokeRepository {
    /// Most recently created jokes first.
    async fn list_recent_jokes(&self, limit: u32) -> Result<Vec<JokeSummary>, AppError>;
    async fn random_joke(&self) -> Result<Option<Joke>, AppError>;
    async fn find_joke_by_id(&self, id: &str) -> Result<Option<Joke>, AppError>;
    async fn create_joke(
        &self,
        name: &str,
        content: &str,
        jokester_id: &str,
    ) -> Result<Joke, AppError>;
    async fn delete_joke(&self, id: &str) -> Result<(), AppError>;
    async fn count_jokes(&self) -> Result<i64, AppError>;
}
