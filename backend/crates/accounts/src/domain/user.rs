//! User Entity
//!
//! The account record: credentials plus profile fields. Profile fields are
//! optional at the type level because profile updates are wholesale
//! replacements: an update that omits a field unsets it. Presence is
//! enforced only at registration.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::PasswordHash;

use crate::domain::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email (unique, login identifier)
    pub email: Email,
    /// Salted password hash; never serialized to clients
    pub password_hash: PasswordHash,
    /// Display name
    pub name: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Binary profile picture
    pub profile_picture: Option<Vec<u8>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration; name and address are required here
    pub fn new(
        email: Email,
        password_hash: PasswordHash,
        name: String,
        address: String,
        profile_picture: Option<Vec<u8>>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            name: Some(name),
            address: Some(address),
            profile_picture,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Wholesale replacement for the updatable profile fields
///
/// `None` does not mean "leave unchanged": the patch is written as-is, so
/// an omitted field is unset. This mirrors the API's update contract.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<Vec<u8>>,
}
