//! Application Layer
//!
//! Use cases orchestrating the domain and the repository.

pub mod config;
pub mod login;
pub mod profile;
pub mod register;

pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use profile::ProfileUseCase;
pub use register::{RegisterInput, RegisterUseCase};
