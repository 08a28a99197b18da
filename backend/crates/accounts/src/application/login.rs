//! Login Use Case
//!
//! Verifies credentials and issues a bearer token. Every failure before
//! token issuance collapses into the same `InvalidCredentials` error so the
//! response cannot reveal which check failed.

use std::sync::Arc;

use platform::password::PlainPassword;
use platform::token::TokenService;

use crate::domain::email::Email;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, valid for the configured TTL
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password = PlainPassword::new(&input.password);
        if !user.password_hash.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id.into_uuid())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}
