use crate::{AppError, Joke, JokeRepository};

pub struct CreateJokeAction<J>
where
    J: JokeRepository,
{
    joke_repository: J,
}

impl<J: JokeRepository> CreateJokeAction<J> {
    pub fn new(joke_repository: J) -> Self {
        Self { joke_repository }
    }

    /// Creates a joke owned by `user_id` and returns it.
    ///
    /// The owner is stamped here, never taken from the form, so a joke
    /// cannot be created on someone else's behalf.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DatabaseError` when the store rejects the write.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_joke", skip_all, err)
    )]
    pub async fn execute(
        &self,
        name: &str,
        content: &str,
        user_id: &str,
    ) -> Result<Joke, AppError> {
        self.joke_repository
            .create_joke(name, content, user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockJokeRepository;

    #[tokio::test]
    async fn test_create_joke_stamps_the_owner() {
        let joke_repo = MockJokeRepository::new();
        let action = CreateJokeAction::new(joke_repo.clone());

        let joke = action
            .execute("Road worker", "I never wanted to believe it.", "user-1")
            .await
            .unwrap();

        assert_eq!(joke.jokester_id, "user-1");
        assert!(!joke.id.is_empty());
        assert_eq!(joke_repo.jokes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_joke_keeps_the_content() {
        let joke_repo = MockJokeRepository::new();
        let action = CreateJokeAction::new(joke_repo);

        let joke = action
            .execute("Frisbee", "I was wondering why the frisbee was getting bigger.", "user-1")
            .await
            .unwrap();

        assert_eq!(joke.name, "Frisbee");
        assert_eq!(
            joke.content,
            "I was wondering why the frisbee was getting bigger."
        );
    }
}
