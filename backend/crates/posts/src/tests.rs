//! Posts crate tests: ownership scoping over an in-memory repository and
//! router-level request flows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use kernel::id::{PostId, UserId};

use crate::application::{CreatePostInput, PostUseCase};
use crate::domain::post::{Post, PostPatch};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemoryPostRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
}

impl PostRepository for MemoryPostRepository {
    async fn insert(&self, post: &Post) -> PostResult<()> {
        self.posts
            .lock()
            .unwrap()
            .insert(post.post_id.into_uuid(), post.clone());
        Ok(())
    }

    async fn find_all_for_user(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        posts.sort_by_key(|p| p.created_at);
        Ok(posts)
    }

    async fn find_for_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> PostResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .get(&post_id.into_uuid())
            .filter(|p| p.user_id == *user_id)
            .cloned())
    }

    async fn update_for_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        patch: PostPatch,
    ) -> PostResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();

        Ok(posts
            .get_mut(&post_id.into_uuid())
            .filter(|p| p.user_id == *user_id)
            .map(|post| {
                post.title = patch.title;
                post.description = patch.description;
                post.image = patch.image;
                post.keywords = patch.keywords;
                post.updated_at = Utc::now();
                post.clone()
            }))
    }

    async fn delete_for_user(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool> {
        let mut posts = self.posts.lock().unwrap();

        let owned = posts
            .get(&post_id.into_uuid())
            .is_some_and(|p| p.user_id == *user_id);

        if owned {
            posts.remove(&post_id.into_uuid());
        }
        Ok(owned)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn create_input(title: &str) -> CreatePostInput {
    CreatePostInput {
        title: title.to_string(),
        description: "Body".to_string(),
        image: vec![1, 2, 3],
        keywords: vec!["tag".to_string()],
    }
}

// ============================================================================
// Use cases
// ============================================================================

#[tokio::test]
async fn test_create_sets_owner_from_caller() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(repo);
    let owner = UserId::new();

    let post = posts.create(&owner, create_input("First")).await.unwrap();

    assert_eq!(post.user_id, owner);
    assert_eq!(post.title.as_deref(), Some("First"));
    assert_eq!(post.image, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_list_is_empty_for_new_owner() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(Arc::clone(&repo));

    posts.create(&UserId::new(), create_input("Someone else's")).await.unwrap();

    let listed = posts.list(&UserId::new()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_returns_only_own_posts() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(repo);
    let alice = UserId::new();
    let bob = UserId::new();

    posts.create(&alice, create_input("A1")).await.unwrap();
    posts.create(&alice, create_input("A2")).await.unwrap();
    posts.create(&bob, create_input("B1")).await.unwrap();

    let listed = posts.list(&alice).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|p| p.user_id == alice));
}

#[tokio::test]
async fn test_other_owners_post_is_not_found() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(repo);
    let alice = UserId::new();
    let bob = UserId::new();

    let post = posts.create(&alice, create_input("Private")).await.unwrap();

    // The id exists but belongs to someone else
    let get = posts.get(&bob, &post.post_id).await.unwrap_err();
    let update = posts
        .update(&bob, &post.post_id, PostPatch::default())
        .await
        .unwrap_err();
    let delete = posts.delete(&bob, &post.post_id).await.unwrap_err();

    assert!(matches!(get, PostError::PostNotFound));
    assert!(matches!(update, PostError::PostNotFound));
    assert!(matches!(delete, PostError::PostNotFound));

    // Still reachable by its owner
    assert!(posts.get(&alice, &post.post_id).await.is_ok());
}

#[tokio::test]
async fn test_update_replaces_wholesale_and_keeps_owner() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(repo);
    let owner = UserId::new();

    let post = posts.create(&owner, create_input("Before")).await.unwrap();

    // Only title supplied: the other content fields are unset
    let updated = posts
        .update(
            &owner,
            &post.post_id,
            PostPatch {
                title: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title.as_deref(), Some("After"));
    assert_eq!(updated.description, None);
    assert_eq!(updated.image, None);
    assert!(updated.keywords.is_empty());
    assert_eq!(updated.user_id, owner);
    assert_eq!(updated.post_id, post.post_id);
}

#[tokio::test]
async fn test_delete_then_delete_is_not_found() {
    let repo = Arc::new(MemoryPostRepository::default());
    let posts = PostUseCase::new(repo);
    let owner = UserId::new();

    let post = posts.create(&owner, create_input("Gone")).await.unwrap();

    posts.delete(&owner, &post.post_id).await.unwrap();

    let err = posts.delete(&owner, &post.post_id).await.unwrap_err();
    assert!(matches!(err, PostError::PostNotFound));
}

// ============================================================================
// Router flows
// ============================================================================

mod router {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use platform::token::TokenService;

    use crate::presentation::router::posts_router_generic;

    const BOUNDARY: &str = "post-test-boundary";

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(b"test-secret", Duration::hours(1)))
    }

    fn app(repo: Arc<MemoryPostRepository>, tokens: Arc<TokenService>) -> axum::Router {
        posts_router_generic(repo, tokens)
    }

    fn bearer(tokens: &TokenService, user_id: &UserId) -> String {
        format!("Bearer {}", tokens.issue(user_id.into_uuid()).unwrap())
    }

    fn create_request(auth: &str) -> Request<Body> {
        let mut body = String::new();
        for (name, value) in [
            ("title", "Hello"),
            ("description", "World"),
            ("image", "raw-bytes"),
            ("keywords", "one"),
            ("keywords", "two"),
        ] {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/posts")
            .header(header::AUTHORIZATION, auth)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_posts_require_token() {
        let repo = Arc::new(MemoryPostRepository::default());

        let response = app(repo, token_service())
            .oneshot(Request::builder().uri("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = Arc::new(MemoryPostRepository::default());
        let tokens = token_service();
        let owner = UserId::new();
        let auth = bearer(&tokens, &owner);

        let response = app(Arc::clone(&repo), Arc::clone(&tokens))
            .oneshot(create_request(&auth))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["title"], "Hello");
        assert_eq!(created["userId"], owner.to_string());
        assert_eq!(created["keywords"], serde_json::json!(["one", "two"]));

        let response = app(repo, tokens)
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .header(header::AUTHORIZATION, auth.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_empty_array_not_message() {
        let repo = Arc::new(MemoryPostRepository::default());
        let tokens = token_service();
        let auth = bearer(&tokens, &UserId::new());

        let response = app(repo, tokens)
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .header(header::AUTHORIZATION, auth.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unparseable_post_id_is_404() {
        let repo = Arc::new(MemoryPostRepository::default());
        let tokens = token_service();
        let auth = bearer(&tokens, &UserId::new());

        let response = app(repo, tokens)
            .oneshot(
                Request::builder()
                    .uri("/posts/not-a-uuid")
                    .header(header::AUTHORIZATION, auth.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Post not found");
    }

    #[tokio::test]
    async fn test_create_missing_image_is_400() {
        let repo = Arc::new(MemoryPostRepository::default());
        let tokens = token_service();
        let auth = bearer(&tokens, &UserId::new());

        let mut body = String::new();
        for (name, value) in [("title", "Hello"), ("description", "World")] {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        let response = app(repo, tokens)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header(header::AUTHORIZATION, auth.as_str())
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
