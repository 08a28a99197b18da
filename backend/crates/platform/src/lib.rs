//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted, fixed cost factor)
//! - Bearer token issuance and verification (JWT, HS256)

pub mod password;
pub mod token;
