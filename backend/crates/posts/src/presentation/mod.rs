//! Presentation Layer
//!
//! HTTP handlers, DTOs and router. Authorization is the shared bearer-token
//! middleware from the accounts crate.

pub mod dto;
pub mod handlers;
pub mod router;
