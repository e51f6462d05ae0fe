use super::ValidationError;

/// Minimum lengths count every character, maximum lengths ignore
/// surrounding whitespace.
pub fn validate_joke_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < 3 {
        return Err(ValidationError::JokeNameTooShort);
    }

    if name.trim().chars().count() > 20 {
        return Err(ValidationError::JokeNameTooLong);
    }

    Ok(())
}

pub fn validate_joke_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() < 10 {
        return Err(ValidationError::JokeContentTooShort);
    }

    if content.trim().chars().count() > 500 {
        return Err(ValidationError::JokeContentTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_joke_name() {
        assert!(validate_joke_name("Road worker").is_ok());
        assert!(validate_joke_name("abc").is_ok());
    }

    #[test]
    fn test_joke_name_too_short() {
        assert_eq!(
            validate_joke_name("ab").unwrap_err(),
            ValidationError::JokeNameTooShort
        );
    }

    #[test]
    fn test_joke_name_too_long() {
        let name = "a".repeat(21);
        assert_eq!(
            validate_joke_name(&name).unwrap_err(),
            ValidationError::JokeNameTooLong
        );
        // Surrounding whitespace does not count toward the limit
        let padded = format!("  {}  ", "a".repeat(20));
        assert!(validate_joke_name(&padded).is_ok());
    }

    #[test]
    fn test_valid_joke_content() {
        assert!(
            validate_joke_content("I never wanted to believe that my Dad was stealing from his job as a road worker. But when I got home, all the signs were there.")
                .is_ok()
        );
    }

    #[test]
    fn test_joke_content_too_short() {
        assert_eq!(
            validate_joke_content("too short").unwrap_err(),
            ValidationError::JokeContentTooShort
        );
    }

    #[test]
    fn test_joke_content_too_long() {
        let content = "a".repeat(501);
        assert_eq!(
            validate_joke_content(&content).unwrap_err(),
            ValidationError::JokeContentTooLong
        );
    }
}
