//! Profile Use Cases
//!
//! Read, update, picture upload and delete for the authenticated caller's
//! own record. All operations are keyed by the user id resolved by the auth
//! middleware; an id that does not resolve is `UserNotFound`.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::user::{ProfilePatch, User};
use crate::error::{AccountError, AccountResult};

/// Profile use case
pub struct ProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the caller's own record
    pub async fn get(&self, user_id: &UserId) -> AccountResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }

    /// Replace name, address and picture with exactly what was supplied
    pub async fn update(&self, user_id: &UserId, patch: ProfilePatch) -> AccountResult<User> {
        let updated = self
            .repo
            .update_profile(user_id, patch)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(updated)
    }

    /// Replace only the profile picture
    pub async fn update_picture(
        &self,
        user_id: &UserId,
        picture: Option<Vec<u8>>,
    ) -> AccountResult<User> {
        let updated = self
            .repo
            .update_profile_picture(user_id, picture)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        tracing::info!(user_id = %user_id, "Profile picture updated");

        Ok(updated)
    }

    /// Delete the caller's record; repeat deletion is `UserNotFound`
    pub async fn delete(&self, user_id: &UserId) -> AccountResult<()> {
        if !self.repo.delete(user_id).await? {
            return Err(AccountError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
