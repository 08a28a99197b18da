//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity and repository trait
//! - `application/` - Use cases (create, list, read, update, delete)
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! Every operation on a single post filters by the compound key
//! `(post_id, user_id)` where the user id comes from the verified bearer
//! token. A post id that exists but belongs to another user is
//! indistinguishable from one that does not exist.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;
