pub mod joke;
pub mod password;
pub mod redirect;
pub mod username;

pub use joke::{validate_joke_content, validate_joke_name};
pub use password::validate_password;
pub use redirect::{validate_redirect_to, DEFAULT_REDIRECT};
pub use username::validate_username;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    UsernameTooShort,
    PasswordTooShort,
    JokeNameTooShort,
    JokeNameTooLong,
    JokeContentTooShort,
    JokeContentTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameTooShort => write!(f, "Username length must be 3 characters and above"),
            Self::PasswordTooShort => write!(f, "Password length must be 6 characters and above"),
            Self::JokeNameTooShort => write!(f, "That joke's name is too short"),
            Self::JokeNameTooLong => write!(f, "Joke name should be less than 20 characters"),
            Self::JokeContentTooShort => write!(f, "That joke too short"),
            Self::JokeContentTooLong => write!(f, "Joke content should be less than 500 characters"),
        }
    }
}

impl std::error::Error for ValidationError {}
