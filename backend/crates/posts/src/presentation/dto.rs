//! API DTOs (Data Transfer Objects)
//!
//! Keywords arrive as repeated multipart text fields named `keywords`; the
//! image travels as base64 in JSON responses.

use axum::extract::Multipart;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Serialize, Serializer};

use crate::domain::post::{Post, PostPatch};
use crate::error::{PostError, PostResult};

// ============================================================================
// Create
// ============================================================================

/// Create form (multipart: title, description, keywords* + file image)
#[derive(Debug)]
pub struct CreatePostForm {
    pub title: String,
    pub description: String,
    pub image: Vec<u8>,
    pub keywords: Vec<String>,
}

impl CreatePostForm {
    /// Parse the multipart body; title, description and image are required
    pub async fn from_multipart(mut multipart: Multipart) -> PostResult<Self> {
        let mut title = None;
        let mut description = None;
        let mut image = None;
        let mut keywords = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("title") => title = Some(field.text().await?),
                Some("description") => description = Some(field.text().await?),
                Some("image") => image = Some(field.bytes().await?.to_vec()),
                Some("keywords") => keywords.push(field.text().await?),
                _ => {}
            }
        }

        Ok(Self {
            title: title.ok_or(PostError::MissingField("title"))?,
            description: description.ok_or(PostError::MissingField("description"))?,
            image: image.ok_or(PostError::MissingField("image"))?,
            keywords,
        })
    }
}

// ============================================================================
// Update
// ============================================================================

/// Update form (same field names as create, everything optional)
///
/// Whatever is present replaces the stored fields wholesale; absent
/// keywords leave an empty list.
#[derive(Debug, Default)]
pub struct UpdatePostForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Vec<u8>>,
    pub keywords: Vec<String>,
}

impl UpdatePostForm {
    pub async fn from_multipart(mut multipart: Multipart) -> PostResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("title") => form.title = Some(field.text().await?),
                Some("description") => form.description = Some(field.text().await?),
                Some("image") => form.image = Some(field.bytes().await?.to_vec()),
                Some("keywords") => form.keywords.push(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            description: self.description,
            image: self.image,
            keywords: self.keywords,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Post response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(serialize_with = "serialize_opt_base64")]
    pub image: Option<Vec<u8>>,
    pub keywords: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            user_id: post.user_id.to_string(),
            title: post.title,
            description: post.description,
            image: post.image,
            keywords: post.keywords,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Fixed-message response body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Serialize optional binary data as a base64 string
fn serialize_opt_base64<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(b) => serializer.serialize_some(&BASE64.encode(b)),
        None => serializer.serialize_none(),
    }
}
