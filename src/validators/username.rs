use super::ValidationError;

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }

    Ok(())
}
