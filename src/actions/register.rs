use crate::crypto::{Argon2Hasher, PasswordHasher, SecretString};
use crate::{AppError, User, UserRepository};

pub struct RegisterAction<U, H = Argon2Hasher>
where
    U: UserRepository,
{
    user_repository: U,
    hasher: H,
}

impl<U: UserRepository> RegisterAction<U, Argon2Hasher> {
    /// Creates a new `RegisterAction` with the default hasher.
    pub fn new(user_repository: U) -> Self {
        Self {
            user_repository,
            hasher: Argon2Hasher::default(),
        }
    }
}

impl<U: UserRepository, H: PasswordHasher> RegisterAction<U, H> {
    /// Creates a new `RegisterAction` with a custom hasher.
    pub fn with_hasher(user_repository: U, hasher: H) -> Self {
        Self {
            user_repository,
            hasher,
        }
    }

    /// Creates an account and returns the new user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UserAlreadyExists` when the username is taken.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "register", skip_all, err))]
    pub async fn execute(&self, username: &str, password: &SecretString) -> Result<User, AppError> {
        if self
            .user_repository
            .find_user_by_username(username)
            .await?
            .is_some()
        {
            return Err(AppError::UserAlreadyExists(username.to_owned()));
        }

        let hashed = self.hasher.hash(password.expose_secret())?;
        self.user_repository.create_user(username, &hashed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockUserRepository;

    #[tokio::test]
    async fn test_register_success() {
        let user_repo = MockUserRepository::new();
        let register = RegisterAction::new(user_repo);

        let result = register.execute("kody", &SecretString::new("twixrox")).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.username, "kody");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_register_stores_a_hash_not_the_password() {
        let user_repo = MockUserRepository::new();
        let register = RegisterAction::new(user_repo.clone());

        register
            .execute("kody", &SecretString::new("twixrox"))
            .await
            .unwrap();

        let stored = user_repo.users.lock().unwrap()[0].password_hash.clone();
        assert_ne!(stored, "twixrox");
        assert!(Argon2Hasher::default().verify("twixrox", &stored).unwrap());
    }

    #[tokio::test]
    async fn test_register_username_taken() {
        let user_repo = MockUserRepository::new();
        let register = RegisterAction::new(user_repo);

        register
            .execute("kody", &SecretString::new("twixrox"))
            .await
            .unwrap();
        let result = register.execute("kody", &SecretString::new("other1")).await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            AppError::UserAlreadyExists("kody".to_owned())
        );
    }
}
