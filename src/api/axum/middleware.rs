use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::routes::AppState;
use crate::session::SessionRedirect;
use crate::{User, UserRepository};

/// Resolves the session cookie to the logged-in user, if any.
///
/// Anonymous requests extract as `CurrentUser(None)`. A session that points
/// at a user who no longer exists (or whose lookup fails) is treated as
/// stale: the cookie is cleared and the request redirected to the login page.
#[derive(Debug)]
pub struct CurrentUser(pub Option<User>);

pub fn extract_cookie_header(headers: &HeaderMap) -> Option<String> {
    headers.get(COOKIE)?.to_str().ok().map(ToOwned::to_owned)
}

impl<U, J> FromRequestParts<AppState<U, J>> for CurrentUser
where
    U: UserRepository + Clone + Send + Sync + 'static,
    J: Clone + Send + Sync + 'static,
{
    type Rejection = SessionRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, J>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = extract_cookie_header(&parts.headers);
        let Some(user_id) = state
            .sessions
            .user_id_from_cookie_header(cookie_header.as_deref())
        else {
            return Ok(CurrentUser(None));
        };

        match state.user_repo.find_user_by_id(&user_id).await {
            Ok(Some(user)) => Ok(CurrentUser(Some(user))),
            Ok(None) | Err(_) => Err(state.sessions.logout()),
        }
    }
}
