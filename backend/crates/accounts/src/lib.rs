//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (register, login, profile management)
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router, auth middleware
//!
//! ## Features
//! - Registration with email + password and optional profile picture
//! - Password login issuing a signed bearer token (JWT, 1 hour)
//! - Profile read/update/delete scoped to the authenticated caller
//! - Stateless bearer-token middleware shared with other feature crates
//!
//! ## Security Model
//! - Passwords hashed with salted bcrypt, never serialized to clients
//! - Login failures are uniform: the response never reveals whether the
//!   email or the password was wrong
//! - Token expiry is the only session termination mechanism

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthLayerState, AuthenticatedUser, require_auth};
pub use presentation::router::accounts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
