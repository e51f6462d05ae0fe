use crate::{AppError, JokeRepository};

pub struct DeleteJokeAction<J>
where
    J: JokeRepository,
{
    joke_repository: J,
}

impl<J: JokeRepository> DeleteJokeAction<J> {
    pub fn new(joke_repository: J) -> Self {
        Self { joke_repository }
    }

    /// Deletes a joke after checking it belongs to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::JokeNotFound` when the joke does not exist and
    /// `AppError::NotJokeOwner` when it belongs to someone else. The
    /// ownership check runs before the delete, so another user's joke is
    /// never touched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_joke", skip_all, err)
    )]
    pub async fn execute(&self, joke_id: &str, user_id: &str) -> Result<(), AppError> {
        let joke = self.joke_repository.find_joke_by_id(joke_id).await?;

        match joke {
            Some(joke) => {
                if !joke.is_owned_by(user_id) {
                    return Err(AppError::NotJokeOwner);
                }
                self.joke_repository.delete_joke(joke_id).await
            }
            None => Err(AppError::JokeNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Joke, MockJokeRepository};

    #[tokio::test]
    async fn test_delete_joke_success() {
        let joke_repo = MockJokeRepository::new();

        let joke = Joke::mock_for_user("user-1");
        let joke_id = joke.id.clone();
        joke_repo.jokes.lock().unwrap().push(joke);

        let action = DeleteJokeAction::new(joke_repo.clone());
        let result = action.execute(&joke_id, "user-1").await;

        assert!(result.is_ok());
        assert!(joke_repo.jokes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_joke_not_found() {
        let joke_repo = MockJokeRepository::new();

        let action = DeleteJokeAction::new(joke_repo);
        let result = action.execute("missing", "user-1").await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), AppError::JokeNotFound);
    }

    #[tokio::test]
    async fn test_delete_joke_not_owner() {
        let joke_repo = MockJokeRepository::new();

        let joke = Joke::mock_for_user("user-1");
        let joke_id = joke.id.clone();
        joke_repo.jokes.lock().unwrap().push(joke);

        let action = DeleteJokeAction::new(joke_repo.clone());
        let result = action.execute(&joke_id, "someone-else").await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), AppError::NotJokeOwner);
        // The joke is still there
        assert_eq!(joke_repo.jokes.lock().unwrap().len(), 1);
    }
}
