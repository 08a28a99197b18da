//! Post Entity
//!
//! A user-owned record with a binary image attachment. The owner id is set
//! at creation and never changes; updates replace the content fields
//! wholesale, like the profile update does.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Owning user; immutable after creation
    pub user_id: UserId,
    /// Title
    pub title: Option<String>,
    /// Body text
    pub description: Option<String>,
    /// Binary image attachment
    pub image: Option<Vec<u8>>,
    /// Search keywords
    pub keywords: Vec<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post; title, description and image are required here
    pub fn new(
        user_id: UserId,
        title: String,
        description: String,
        image: Vec<u8>,
        keywords: Vec<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id,
            title: Some(title),
            description: Some(description),
            image: Some(image),
            keywords,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Wholesale replacement for the updatable post fields
///
/// As with the profile patch, `None` unsets the stored field rather than
/// preserving it. The owner id is not part of the patch.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Vec<u8>>,
    pub keywords: Vec<String>,
}
