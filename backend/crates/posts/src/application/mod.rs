//! Application Layer

pub mod post_service;

pub use post_service::{CreatePostInput, PostUseCase};
