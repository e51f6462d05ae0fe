#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use rand::Rng;
use std::sync::{Arc, Mutex};

use crate::AppError;

use super::joke::{Joke, JokeRepository, JokeSummary};

#[derive(Clone)]
pub struct MockJokeRepository {
    pub jokes: Arc<Mutex<Vec<Joke>>>,
}

impl MockJokeRepository {
    pub fn new() -> Self {
        Self {
            jokes: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl JokeRepository for MockJokeRepository {
    async fn list_recent_jokes(&self, limit: u32) -> Result<Vec<JokeSummary>, AppError> {
        let jokes = self.jokes.lock().unwrap();
        Ok(jokes
            .iter()
            .rev()
            .take(limit as usize)
            .map(|joke| JokeSummary {
                id: joke.id.clone(),
                name: joke.name.clone(),
            })
            .collect())
    }

    async fn random_joke(&self) -> Result<Option<Joke>, AppError> {
        let jokes = self.jokes.lock().unwrap();
        if jokes.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..jokes.len());
        Ok(jokes.get(index).cloned())
    }

    async fn find_joke_by_id(&self, id: &str) -> Result<Option<Joke>, AppError> {
        let jokes = self.jokes.lock().unwrap();
        Ok(jokes.iter().find(|joke| joke.id == id).cloned())
    }

    async fn create_joke(
        &self,
        name: &str,
        content: &str,
        jokester_id: &str,
    ) -> Result<Joke, AppError> {
        let joke = Joke::mock_from_parts(name, content, jokester_id);

        let mut jokes = self.jokes.lock().unwrap();
        jokes.push(joke.clone());
        drop(jokes);

        Ok(joke)
    }

    async fn delete_joke(&self, id: &str) -> Result<(), AppError> {
        let mut jokes = self.jokes.lock().unwrap();
        let len_before = jokes.len();
        jokes.retain(|joke| joke.id != id);
        if jokes.len() < len_before {
            Ok(())
        } else {
            Err(AppError::JokeNotFound)
        }
    }

    async fn count_jokes(&self) -> Result<i64, AppError> {
        let jokes = self.jokes.lock().unwrap();
        Ok(jokes.len() as i64)
    }
}
