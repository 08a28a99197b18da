//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Random per-call salting (equal inputs hash differently)
//! - Zeroization of plaintext material
//! - Verification that never errors: a malformed stored hash is a non-match
//!
//! There is deliberately no password policy here. Account registration
//! accepts whatever the caller sent; the only contract is that hashing is
//! one-way and salted.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// bcrypt cost factor (2^10 rounds)
pub const HASH_COST: u32 = 10;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Plain Password (Zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization
///
/// Input is NFKC-normalized so that the same user-visible password always
/// produces the same byte sequence for hashing and verification.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Wrap a plaintext password, normalizing it with NFKC
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().nfkc().collect())
    }

    /// Password bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (Safe to store)
// ============================================================================

/// Hashed password in bcrypt string format
///
/// Safe to persist. The salt is embedded in the hash string, so hashing the
/// same plaintext twice yields different strings that both verify.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt
    pub fn from_plain(plain: &PlainPassword) -> Result<Self, PasswordHashError> {
        let hash = bcrypt::hash(plain.as_bytes(), HASH_COST)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        Ok(Self(hash))
    }

    /// Wrap a stored hash string (e.g. from the database)
    ///
    /// No validation: a corrupt stored value simply never verifies.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Hash string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a plaintext password against this hash
    ///
    /// Returns false for any mismatch, including a malformed stored hash.
    pub fn verify(&self, plain: &PlainPassword) -> bool {
        bcrypt::verify(plain.as_bytes(), &self.0).unwrap_or(false)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
