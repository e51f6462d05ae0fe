use crate::crypto::{Argon2Hasher, PasswordHasher, SecretString};
use crate::{AppError, User, UserRepository};

pub struct LoginAction<U, H = Argon2Hasher>
where
    U: UserRepository,
{
    user_repository: U,
    hasher: H,
}

impl<U: UserRepository> LoginAction<U, Argon2Hasher> {
    /// Creates a new `LoginAction` with the default hasher.
    pub fn new(user_repository: U) -> Self {
        Self {
            user_repository,
            hasher: Argon2Hasher::default(),
        }
    }
}

impl<U: UserRepository, H: PasswordHasher> LoginAction<U, H> {
    /// Creates a new `LoginAction` with a custom hasher.
    pub fn with_hasher(user_repository: U, hasher: H) -> Self {
        Self {
            user_repository,
            hasher,
        }
    }

    /// Checks the credentials and returns the matching user.
    ///
    /// An unknown username and a wrong password both return
    /// `AppError::InvalidCredentials`, so a caller cannot probe which
    /// usernames exist.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(&self, username: &str, password: &SecretString) -> Result<User, AppError> {
        let user = self.user_repository.find_user_by_username(username).await?;

        match user {
            Some(user) => {
                if !self
                    .hasher
                    .verify(password.expose_secret(), &user.password_hash)?
                {
                    return Err(AppError::InvalidCredentials);
                }
                Ok(user)
            }
            None => Err(AppError::InvalidCredentials),
        }
    }
}
