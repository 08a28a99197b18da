//! API DTOs (Data Transfer Objects)
//!
//! Multipart bodies are parsed once at the boundary into explicit form
//! structs; handlers never touch raw request parts. Binary fields travel
//! as base64 strings in JSON responses.

use axum::extract::Multipart;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::user::{ProfilePatch, User};
use crate::error::{AccountError, AccountResult};

// ============================================================================
// Register
// ============================================================================

/// Register form (multipart: email, password, name, address + file
/// profilePicture)
#[derive(Debug)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub profile_picture: Option<Vec<u8>>,
}

impl RegisterForm {
    /// Parse the multipart body; all text fields are required, the picture
    /// is optional
    pub async fn from_multipart(mut multipart: Multipart) -> AccountResult<Self> {
        let mut email = None;
        let mut password = None;
        let mut name = None;
        let mut address = None;
        let mut profile_picture = None;

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("email") => email = Some(field.text().await?),
                Some("password") => password = Some(field.text().await?),
                Some("name") => name = Some(field.text().await?),
                Some("address") => address = Some(field.text().await?),
                Some("profilePicture") => {
                    profile_picture = Some(field.bytes().await?.to_vec());
                }
                _ => {}
            }
        }

        Ok(Self {
            email: email.ok_or(AccountError::MissingField("email"))?,
            password: password.ok_or(AccountError::MissingField("password"))?,
            name: name.ok_or(AccountError::MissingField("name"))?,
            address: address.ok_or(AccountError::MissingField("address"))?,
            profile_picture,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request (JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Profile update
// ============================================================================

/// Profile update form (multipart: name, address + file profilePicture)
///
/// Every field is optional at the wire level; whatever is present replaces
/// the stored fields wholesale.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<Vec<u8>>,
}

impl ProfileForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AccountResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("name") => form.name = Some(field.text().await?),
                Some("address") => form.address = Some(field.text().await?),
                Some("profilePicture") => {
                    form.profile_picture = Some(field.bytes().await?.to_vec());
                }
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn into_patch(self) -> ProfilePatch {
        ProfilePatch {
            name: self.name,
            address: self.address,
            profile_picture: self.profile_picture,
        }
    }
}

/// Picture-only form (multipart: file profilePicture)
#[derive(Debug, Default)]
pub struct PictureForm {
    pub profile_picture: Option<Vec<u8>>,
}

impl PictureForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AccountResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            if field_name.as_deref() == Some("profilePicture") {
                form.profile_picture = Some(field.bytes().await?.to_vec());
            }
        }

        Ok(form)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// User response: the account record without the password hash
///
/// There is no password field to forget to skip; the hash cannot appear
/// here by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(serialize_with = "serialize_opt_base64")]
    pub profile_picture: Option<Vec<u8>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.into_db(),
            name: user.name,
            address: user.address,
            profile_picture: user.profile_picture,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Fixed-message response body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Serialize optional binary data as a base64 string
pub fn serialize_opt_base64<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(b) => serializer.serialize_some(&BASE64.encode(b)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::Email;
    use platform::password::{PasswordHash, PlainPassword};

    #[test]
    fn test_user_response_has_no_password_hash() {
        let hash = PasswordHash::from_plain(&PlainPassword::new("pw")).unwrap();
        let user = User::new(
            Email::new("a@x.com").unwrap(),
            hash.clone(),
            "A".to_string(),
            "Addr".to_string(),
            None,
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["name"], "A");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains(hash.as_str()));
    }

    #[test]
    fn test_picture_serialized_as_base64() {
        let hash = PasswordHash::from_plain(&PlainPassword::new("pw")).unwrap();
        let user = User::new(
            Email::new("a@x.com").unwrap(),
            hash,
            "A".to_string(),
            "Addr".to_string(),
            Some(vec![1, 2, 3]),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["profilePicture"], "AQID");
    }
}
