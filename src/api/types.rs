use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Request DTOs

/// Body of `POST /login`.
///
/// Every field is optional so a half-filled form reaches the handler,
/// which answers with a form error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub login_type: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub redirect_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewJokeForm {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteJokeForm {
    #[serde(rename = "_method")]
    pub method: String,
}

// Response DTOs

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeResponse {
    pub id: String,
    pub name: String,
    pub content: String,
    pub jokester_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct JokeSummaryResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct JokesIndexResponse {
    pub jokes: Vec<JokeSummaryResponse>,
    pub user: Option<UserResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeDetailResponse {
    pub joke: JokeResponse,
    pub is_owner: bool,
}

/// Echo of the submitted login form. The password is never sent back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFields {
    pub login_type: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginFieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Error body of `POST /login`. Absent parts serialize as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginErrorBody {
    pub field_errors: Option<LoginFieldErrors>,
    pub fields: Option<LoginFields>,
    pub form_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JokeFields {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct JokeFieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Error body of `POST /jokes`. Absent parts serialize as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeErrorBody {
    pub field_errors: Option<JokeFieldErrors>,
    pub fields: Option<JokeFields>,
    pub form_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<crate::User> for UserResponse {
    fn from(user: crate::User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<crate::Joke> for JokeResponse {
    fn from(joke: crate::Joke) -> Self {
        JokeResponse {
            id: joke.id,
            name: joke.name,
            content: joke.content,
            jokester_id: joke.jokester_id,
            created_at: joke.created_at,
        }
    }
}

impl From<crate::JokeSummary> for JokeSummaryResponse {
    fn from(joke: crate::JokeSummary) -> Self {
        JokeSummaryResponse {
            id: joke.id,
            name: joke.name,
        }
    }
}

impl From<crate::AppError> for ErrorResponse {
    fn from(err: crate::AppError) -> Self {
        let code = match &err {
            crate::AppError::UserNotFound => "USER_NOT_FOUND",
            crate::AppError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            crate::AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            crate::AppError::JokeNotFound => "JOKE_NOT_FOUND",
            crate::AppError::NotJokeOwner => "NOT_JOKE_OWNER",
            crate::AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            crate::AppError::PasswordHashError => "PASSWORD_HASH_ERROR",
            crate::AppError::Validation(_) => "VALIDATION_ERROR",
            crate::AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            crate::AppError::DatabaseError(_) => "DATABASE_ERROR",
        };

        ErrorResponse {
            error: err.to_string(),
            code: code.to_owned(),
        }
    }
}
