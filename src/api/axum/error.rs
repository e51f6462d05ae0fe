use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use crate::api::ErrorResponse;
use crate::session::SessionRedirect;
use crate::AppError;

/// converts `AppError` into appropriate HTTP responses
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse::from(self.0.clone());
        let status = match &self.0 {
            AppError::Validation(_) | AppError::UserAlreadyExists(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotJokeOwner => StatusCode::UNAUTHORIZED,
            AppError::JokeNotFound | AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PasswordHashError
            | AppError::ConfigurationError(_)
            | AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(error_response)).into_response()
    }
}

impl IntoResponse for SessionRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(&self.location).into_response();

        if let Some(cookie) = self.set_cookie {
            // Cookie strings are assembled from base64, hex, and fixed
            // attributes, all of which are valid header characters.
            #[allow(clippy::expect_used)]
            let value =
                HeaderValue::from_str(&cookie).expect("session cookies are always ASCII");
            response.headers_mut().insert(header::SET_COOKIE, value);
        }

        response
    }
}
