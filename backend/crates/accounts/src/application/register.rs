//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{PasswordHash, PlainPassword};

use crate::domain::email::Email;
use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub profile_picture: Option<Vec<u8>>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<()> {
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        // Pre-check; the UNIQUE constraint is the actual guarantee and the
        // infra layer maps its violation to the same error
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = PasswordHash::from_plain(&PlainPassword::new(&input.password))?;

        let user = User::new(
            email,
            password_hash,
            input.name,
            input.address,
            input.profile_picture,
        );

        self.repo.insert(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(())
    }
}
