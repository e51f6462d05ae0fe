use super::ValidationError;

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("twixrox").is_ok());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("").unwrap_err(),
            ValidationError::PasswordTooShort
        );
        assert_eq!(
            validate_password("12345").unwrap_err(),
            ValidationError::PasswordTooShort
        );
    }
}
