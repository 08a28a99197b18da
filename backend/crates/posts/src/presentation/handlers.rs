//! HTTP Handlers
//!
//! The post id arrives as a path string and is parsed here; a string that
//! is not a valid id cannot match any record, so it maps to the same 404 as
//! an unknown id.

use axum::Json;
use axum::extract::{Extension, Multipart, Path, State};
use std::sync::Arc;

use kernel::id::PostId;

use accounts::presentation::middleware::AuthenticatedUser;

use crate::application::{CreatePostInput, PostUseCase};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{CreatePostForm, MessageResponse, PostResponse, UpdatePostForm};

/// Shared handler state
pub struct PostAppState<R>
where
    R: PostRepository,
{
    pub posts: PostUseCase<R>,
}

impl<R> PostAppState<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            posts: PostUseCase::new(repo),
        }
    }
}

fn parse_post_id(raw: &str) -> PostResult<PostId> {
    raw.parse().map_err(|_| PostError::PostNotFound)
}

/// POST /posts
pub async fn create_post<R>(
    State(state): State<Arc<PostAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository,
{
    let form = CreatePostForm::from_multipart(multipart).await?;

    let post = state
        .posts
        .create(
            &caller.0,
            CreatePostInput {
                title: form.title,
                description: form.description,
                image: form.image,
                keywords: form.keywords,
            },
        )
        .await?;

    Ok(Json(PostResponse::from(post)))
}

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<Arc<PostAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository,
{
    let posts = state.posts.list(&caller.0).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/:postId
pub async fn get_post<R>(
    State(state): State<Arc<PostAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository,
{
    let post_id = parse_post_id(&post_id)?;

    let post = state.posts.get(&caller.0, &post_id).await?;

    Ok(Json(PostResponse::from(post)))
}

/// PUT /posts/:postId
pub async fn update_post<R>(
    State(state): State<Arc<PostAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    multipart: Multipart,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository,
{
    let post_id = parse_post_id(&post_id)?;
    let form = UpdatePostForm::from_multipart(multipart).await?;

    let post = state
        .posts
        .update(&caller.0, &post_id, form.into_patch())
        .await?;

    Ok(Json(PostResponse::from(post)))
}

/// DELETE /posts/:postId
pub async fn delete_post<R>(
    State(state): State<Arc<PostAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository,
{
    let post_id = parse_post_id(&post_id)?;

    state.posts.delete(&caller.0, &post_id).await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully",
    }))
}
