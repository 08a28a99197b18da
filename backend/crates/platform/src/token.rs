//! Bearer Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens (JWT, HS256).
//! A token carries only the user identifier and an expiry; there is no
//! revocation list, so expiry is the only termination mechanism.
//!
//! The signing secret comes from configuration at process start. The
//! service cannot be constructed without one, so issuance can never
//! silently produce unverifiable tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, malformed token, or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token could not be signed
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Wire-format claims: `{"userId": "<uuid>", "exp": <unix seconds>}`
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    exp: i64,
}

/// Issues and verifies bearer tokens with a process-wide secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a service from the shared signing secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a signed token for the given user, expiring after the
    /// configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and extract the user identifier
    ///
    /// Fails for any of: bad signature, malformed token, expired token,
    /// unparseable user identifier. No expiry leeway is granted.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        Uuid::parse_str(&data.claims.user_id).map_err(|_| TokenError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::hours(1))
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id).unwrap();
        assert_eq!(svc.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_claim_shape() {
        // Wire compatibility: payload must be {"userId": ..., "exp": ...}
        let svc = service();
        let token = svc.issue(Uuid::new_v4()).unwrap();

        let payload_b64 = token.split('.').nth(1).unwrap();
        let payload = base64_decode_urlsafe(payload_b64);
        let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();

        assert!(value.get("userId").is_some());
        assert!(value.get("exp").is_some());
    }

    fn base64_decode_urlsafe(s: &str) -> Vec<u8> {
        // Url-safe alphabet, no padding
        const TABLE: &[u8; 64] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
        let mut out = Vec::new();
        let mut buf = 0u32;
        let mut bits = 0u32;
        for &c in s.as_bytes() {
            let v = TABLE.iter().position(|&t| t == c).unwrap() as u32;
            buf = (buf << 6) | v;
            bits += 6;
            if bits >= 8 {
                bits -= 8;
                out.push((buf >> bits) as u8);
            }
        }
        out
    }

    #[test]
    fn test_tampered_token_fails() {
        let svc = service();
        let token = svc.issue(Uuid::new_v4()).unwrap();

        // Flip one character of the signature
        let mut tampered: Vec<char> = token.chars().collect();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == 'A' { 'B' } else { 'A' };
        let tampered: String = tampered.into_iter().collect();

        assert!(svc.verify(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_fails() {
        // A service with a negative TTL issues already-expired tokens
        let svc = TokenService::new(SECRET, Duration::seconds(-10));
        let token = svc.issue(Uuid::new_v4()).unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let svc = service();
        let other = TokenService::new(b"a-different-secret", Duration::hours(1));

        let token = svc.issue(Uuid::new_v4()).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        let svc = service();
        assert!(svc.verify("not-a-jwt").is_err());
        assert!(svc.verify("").is_err());
    }
}
