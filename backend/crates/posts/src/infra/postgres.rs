//! PostgreSQL Repository Implementation
//!
//! Single-post statements filter on `post_id AND user_id`; ownership is a
//! property of the query, not a separate check.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::{Post, PostPatch};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    title: Option<String>,
    description: Option<String>,
    image: Option<Vec<u8>>,
    keywords: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            description: self.description,
            image: self.image,
            keywords: self.keywords,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const POST_COLUMNS: &str =
    "post_id, user_id, title, description, image, keywords, created_at, updated_at";

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn insert(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                title,
                description,
                image,
                keywords,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.title.as_deref())
        .bind(post.description.as_deref())
        .bind(post.image.as_deref())
        .bind(&post.keywords)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all_for_user(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_for_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE post_id = $1 AND user_id = $2"
        ))
        .bind(post_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update_for_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        patch: PostPatch,
    ) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts SET
                title = $3,
                description = $4,
                image = $5,
                keywords = $6,
                updated_at = $7
            WHERE post_id = $1 AND user_id = $2
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(post_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.image.as_deref())
        .bind(&patch.keywords)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete_for_user(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
