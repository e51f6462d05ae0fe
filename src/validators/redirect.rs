//! Redirect target validation.
//!
//! `redirectTo` comes from user input (a hidden form field), so it must be
//! checked against an allow-list of internal paths before the server issues
//! a redirect to it. Anything else would be an open redirect.

/// Paths a login redirect is allowed to land on.
const ALLOWED_REDIRECTS: &[&str] = &["/", "/jokes", "/jokes/new"];

/// Fallback when the requested target is missing or not allow-listed.
pub const DEFAULT_REDIRECT: &str = "/jokes";

/// Resolves a user-supplied redirect target to a known-safe path.
///
/// Returns the candidate unchanged when it is on the allow-list, and
/// [`DEFAULT_REDIRECT`] otherwise.
#[must_use]
pub fn validate_redirect_to(candidate: Option<&str>) -> &str {
    match candidate {
        Some(url) if ALLOWED_REDIRECTS.contains(&url) => url,
        _ => DEFAULT_REDIRECT,
    }
}
