//! Post Use Cases
//!
//! CRUD over the caller's own posts. The owner id always comes from the
//! verified token, never from the request body, so one use case instance
//! serves every caller.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::post::{Post, PostPatch};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Create input
pub struct CreatePostInput {
    pub title: String,
    pub description: String,
    pub image: Vec<u8>,
    pub keywords: Vec<String>,
}

/// Post use case
pub struct PostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> PostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a post owned by the caller
    pub async fn create(&self, user_id: &UserId, input: CreatePostInput) -> PostResult<Post> {
        let post = Post::new(
            *user_id,
            input.title,
            input.description,
            input.image,
            input.keywords,
        );

        self.repo.insert(&post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %user_id, "Post created");

        Ok(post)
    }

    /// List the caller's posts; an owner with no posts gets an empty list
    pub async fn list(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        self.repo.find_all_for_user(user_id).await
    }

    /// Fetch one of the caller's posts
    pub async fn get(&self, user_id: &UserId, post_id: &PostId) -> PostResult<Post> {
        self.repo
            .find_for_user(post_id, user_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }

    /// Replace the content fields of one of the caller's posts
    pub async fn update(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        patch: PostPatch,
    ) -> PostResult<Post> {
        let updated = self
            .repo
            .update_for_user(post_id, user_id, patch)
            .await?
            .ok_or(PostError::PostNotFound)?;

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post updated");

        Ok(updated)
    }

    /// Delete one of the caller's posts; repeat deletion is `PostNotFound`
    pub async fn delete(&self, user_id: &UserId, post_id: &PostId) -> PostResult<()> {
        if !self.repo.delete_for_user(post_id, user_id).await? {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post deleted");

        Ok(())
    }
}
