mod error;
mod handlers;
mod middleware;
mod routes;

pub use error::ApiError;
pub use middleware::{extract_cookie_header, CurrentUser};
pub use routes::{AppState, app_routes, auth_routes, joke_routes};
