//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Credential hashing (`password`) and token signing (`token`) sit beside the
//! service as collaborators it is constructed with.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use service::AuthService;
pub use token::{JwtTokenIssuer, TokenIssuer};
