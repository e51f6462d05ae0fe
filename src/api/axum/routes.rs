use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::session::SessionManager;
use crate::{JokeRepository, UserRepository};

#[derive(Clone)]
pub struct AppState<U, J> {
    pub user_repo: U,
    pub joke_repo: J,
    pub sessions: Arc<SessionManager>,
}

/// All application routes.
pub fn app_routes<U, J>() -> Router<AppState<U, J>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    Router::new().merge(auth_routes()).merge(joke_routes())
}

pub fn auth_routes<U, J>() -> Router<AppState<U, J>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<U, J>))
        .route("/logout", post(handlers::logout::<U, J>))
}

pub fn joke_routes<U, J>() -> Router<AppState<U, J>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/jokes", get(handlers::jokes_index::<U, J>))
        .route("/jokes", post(handlers::create_joke::<U, J>))
        .route("/jokes/random", get(handlers::random_joke::<U, J>))
        .route("/jokes/{joke_id}", get(handlers::get_joke::<U, J>))
        .route("/jokes/{joke_id}", post(handlers::delete_joke::<U, J>))
}
