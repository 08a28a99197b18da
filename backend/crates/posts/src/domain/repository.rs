//! Repository Trait
//!
//! Every single-post operation takes the owner id alongside the post id so
//! the store can filter on the compound key in one statement. There is no
//! way to reach a post without naming its owner.

use kernel::id::{PostId, UserId};

use crate::domain::post::{Post, PostPatch};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post
    async fn insert(&self, post: &Post) -> PostResult<()>;

    /// All posts owned by the user, empty when there are none
    async fn find_all_for_user(&self, user_id: &UserId) -> PostResult<Vec<Post>>;

    /// Find a post by the (post id, owner) pair
    async fn find_for_user(&self, post_id: &PostId, user_id: &UserId)
    -> PostResult<Option<Post>>;

    /// Replace the content fields wholesale, filtered by owner
    async fn update_for_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        patch: PostPatch,
    ) -> PostResult<Option<Post>>;

    /// Delete a post filtered by owner; false when nothing matched
    async fn delete_for_user(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool>;
}
