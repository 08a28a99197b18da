//! Domain Layer
//!
//! User entity, value objects and the repository trait.
//! No HTTP or database types leak into this layer.

pub mod email;
pub mod repository;
pub mod user;
