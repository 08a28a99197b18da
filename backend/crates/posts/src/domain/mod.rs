//! Domain Layer

pub mod post;
pub mod repository;
