//! Repository Trait
//!
//! Interface for user persistence. Implementation is in the infrastructure
//! layer. Updates and deletes return the affected record (or a flag) so the
//! caller can distinguish "absent" from "updated" without a second query;
//! the store performs the filtered operation atomically.

use kernel::id::UserId;

use crate::domain::email::Email;
use crate::domain::user::{ProfilePatch, User};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    async fn insert(&self, user: &User) -> AccountResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Replace the profile fields wholesale, returning the updated user
    async fn update_profile(
        &self,
        user_id: &UserId,
        patch: ProfilePatch,
    ) -> AccountResult<Option<User>>;

    /// Replace only the profile picture, returning the updated user
    async fn update_profile_picture(
        &self,
        user_id: &UserId,
        picture: Option<Vec<u8>>,
    ) -> AccountResult<Option<User>>;

    /// Delete a user; false when no record matched
    async fn delete(&self, user_id: &UserId) -> AccountResult<bool>;
}
