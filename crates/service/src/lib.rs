//! Service layer for the auth microservice.
//! - Business rules for register / login / verify live in `auth::service`.
//! - Persistence is reached only through `auth::repository::AuthRepository`.
//! - Errors are explicit `AuthError` values; nothing here knows about the transport.

pub mod auth;
#[cfg(test)]
pub mod test_support;
