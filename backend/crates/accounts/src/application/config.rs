//! Application Configuration
//!
//! Configuration for the accounts application layer. Constructed once at
//! process start from the environment and passed by reference; there are
//! no ambient globals.

use chrono::Duration;
use std::fmt;

/// Accounts application configuration
#[derive(Clone)]
pub struct AccountsConfig {
    /// Shared token signing secret
    pub token_secret: Vec<u8>,
    /// Bearer token lifetime (1 hour)
    pub token_ttl: Duration,
}

impl AccountsConfig {
    /// Create config from the signing secret with the standard 1 hour TTL
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::hours(1),
        }
    }
}

impl fmt::Debug for AccountsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountsConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = AccountsConfig::new(b"secret".to_vec());
        assert_eq!(config.token_ttl, Duration::hours(1));
    }

    #[test]
    fn test_debug_redaction() {
        let config = AccountsConfig::new(b"super-secret".to_vec());
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }
}
