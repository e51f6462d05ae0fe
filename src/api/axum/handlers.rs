//! HTTP handlers for the jokes app endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};

use super::error::ApiError;
use super::middleware::{extract_cookie_header, CurrentUser};
use super::routes::AppState;
use crate::actions::{CreateJokeAction, DeleteJokeAction, LoginAction, RegisterAction};
use crate::api::{
    DeleteJokeForm, ErrorResponse, JokeDetailResponse, JokeErrorBody, JokeFieldErrors, JokeFields,
    JokeResponse, JokesIndexResponse, LoginErrorBody, LoginFieldErrors, LoginFields, LoginForm,
    NewJokeForm,
};
use crate::session::AuthCheck;
use crate::validators::{
    validate_joke_content, validate_joke_name, validate_password, validate_redirect_to,
    validate_username,
};
use crate::{AppError, JokeRepository, SecretString, UserRepository};

/// How many jokes the index lists.
const RECENT_JOKES_LIMIT: u32 = 5;

/// Log in or register, then start a session.
///
/// POST /login
pub async fn login<U, J>(
    State(state): State<AppState<U, J>>,
    Form(body): Form<LoginForm>,
) -> impl IntoResponse
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: Clone + Send + Sync + 'static,
{
    let (Some(login_type), Some(username), Some(password)) =
        (body.login_type, body.username, body.password)
    else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginErrorBody {
                field_errors: None,
                fields: None,
                form_error: Some("Form not submitted correctly.".to_owned()),
            }),
        )
            .into_response();
    };

    let redirect_to = validate_redirect_to(body.redirect_to.as_deref()).to_owned();

    let field_errors = LoginFieldErrors {
        username: validate_username(&username).err().map(|e| e.to_string()),
        password: validate_password(&password).err().map(|e| e.to_string()),
    };
    if field_errors.username.is_some() || field_errors.password.is_some() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginErrorBody {
                field_errors: Some(field_errors),
                fields: Some(LoginFields {
                    login_type,
                    username,
                }),
                form_error: None,
            }),
        )
            .into_response();
    }

    let password = SecretString::new(password);

    let result = if login_type == "login" {
        LoginAction::new(state.user_repo)
            .execute(&username, &password)
            .await
    } else if login_type == "register" {
        RegisterAction::new(state.user_repo)
            .execute(&username, &password)
            .await
    } else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginErrorBody {
                field_errors: None,
                fields: Some(LoginFields {
                    login_type,
                    username,
                }),
                form_error: Some("Login type invalid".to_owned()),
            }),
        )
            .into_response();
    };

    match result {
        Ok(user) => state
            .sessions
            .create_user_session(&user.id, &redirect_to)
            .into_response(),
        Err(err @ AppError::InvalidCredentials) => (
            StatusCode::BAD_REQUEST,
            Json(LoginErrorBody {
                field_errors: None,
                fields: Some(LoginFields {
                    login_type,
                    username,
                }),
                form_error: Some(err.to_string()),
            }),
        )
            .into_response(),
        Err(err @ AppError::UserAlreadyExists(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LoginErrorBody {
                field_errors: None,
                fields: Some(LoginFields {
                    login_type,
                    username,
                }),
                form_error: Some(err.to_string()),
            }),
        )
            .into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// End the session and go back to the login page.
///
/// POST /logout
pub async fn logout<U, J>(State(state): State<AppState<U, J>>) -> impl IntoResponse
where
    U: Clone + Send + Sync + 'static,
    J: Clone + Send + Sync + 'static,
{
    state.sessions.logout()
}

/// The most recent jokes, plus the logged-in user if there is one.
///
/// GET /jokes
pub async fn jokes_index<U, J>(
    State(state): State<AppState<U, J>>,
    user: CurrentUser,
) -> impl IntoResponse
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    match state.joke_repo.list_recent_jokes(RECENT_JOKES_LIMIT).await {
        Ok(jokes) => Json(JokesIndexResponse {
            jokes: jokes.into_iter().map(Into::into).collect(),
            user: user.0.map(Into::into),
        })
        .into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// One joke, picked at random.
///
/// GET /jokes/random
pub async fn random_joke<U, J>(State(state): State<AppState<U, J>>) -> impl IntoResponse
where
    U: Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    match state.joke_repo.random_joke().await {
        Ok(Some(joke)) => Json(JokeResponse::from(joke)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No random joke found".to_owned(),
                code: "JOKE_NOT_FOUND".to_owned(),
            }),
        )
            .into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// A single joke, with an ownership flag for the current session.
///
/// GET /jokes/{joke_id}
pub async fn get_joke<U, J>(
    State(state): State<AppState<U, J>>,
    Path(joke_id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    U: Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    let joke = match state.joke_repo.find_joke_by_id(&joke_id).await {
        Ok(Some(joke)) => joke,
        Ok(None) => return ApiError(AppError::JokeNotFound).into_response(),
        Err(err) => return ApiError(err).into_response(),
    };

    let cookie_header = extract_cookie_header(&headers);
    let user_id = state
        .sessions
        .user_id_from_cookie_header(cookie_header.as_deref());
    let is_owner = user_id.as_deref().is_some_and(|id| joke.is_owned_by(id));

    Json(JokeDetailResponse {
        joke: joke.into(),
        is_owner,
    })
    .into_response()
}

/// Create a joke owned by the logged-in user.
///
/// POST /jokes
pub async fn create_joke<U, J>(
    State(state): State<AppState<U, J>>,
    headers: HeaderMap,
    Form(body): Form<NewJokeForm>,
) -> impl IntoResponse
where
    U: Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    // Anonymous authors come back to the joke form after logging in
    let cookie_header = extract_cookie_header(&headers);
    let user_id = match state
        .sessions
        .require_user_id(cookie_header.as_deref(), "/jokes/new")
    {
        AuthCheck::Authorized(user_id) => user_id,
        AuthCheck::Redirect(redirect) => return redirect.into_response(),
    };

    let field_errors = JokeFieldErrors {
        name: validate_joke_name(&body.name).err().map(|e| e.to_string()),
        content: validate_joke_content(&body.content)
            .err()
            .map(|e| e.to_string()),
    };
    if field_errors.name.is_some() || field_errors.content.is_some() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(JokeErrorBody {
                field_errors: Some(field_errors),
                fields: Some(JokeFields {
                    name: body.name,
                    content: body.content,
                }),
                form_error: None,
            }),
        )
            .into_response();
    }

    let action = CreateJokeAction::new(state.joke_repo);
    match action.execute(&body.name, &body.content, &user_id).await {
        Ok(joke) => Redirect::to(&format!("/jokes/{}", joke.id)).into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// Delete a joke through a form post carrying `_method=delete`.
///
/// POST /jokes/{joke_id}
pub async fn delete_joke<U, J>(
    State(state): State<AppState<U, J>>,
    Path(joke_id): Path<String>,
    headers: HeaderMap,
    Form(body): Form<DeleteJokeForm>,
) -> impl IntoResponse
where
    U: Clone + Send + Sync + 'static,
    J: JokeRepository + Clone + Send + Sync + 'static,
{
    // The method check runs before the auth check, like the form tunnel
    // it emulates: a bad verb is a 405 even for anonymous callers.
    if body.method != "delete" {
        return ApiError(AppError::MethodNotAllowed(body.method)).into_response();
    }

    let cookie_header = extract_cookie_header(&headers);
    let user_id = match state
        .sessions
        .require_user_id(cookie_header.as_deref(), &format!("/jokes/{joke_id}"))
    {
        AuthCheck::Authorized(user_id) => user_id,
        AuthCheck::Redirect(redirect) => return redirect.into_response(),
    };

    let action = DeleteJokeAction::new(state.joke_repo);
    match action.execute(&joke_id, &user_id).await {
        Ok(()) => Redirect::to("/jokes").into_response(),
        Err(AppError::JokeNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Can't delete what does not exist".to_owned(),
                code: "JOKE_NOT_FOUND".to_owned(),
            }),
        )
            .into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}
