use common::types::ErrorBody;
use http::StatusCode;
use service::auth::errors::AuthError;
use thiserror::Error;
use tracing::error;

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_USER_EXISTS: &str = "User already exists";
pub const MSG_INTERNAL: &str = "Something went wrong. Try again!";

/// Failure carried back to the RPC caller as an `ErrorBody`.
#[derive(Debug, Clone, Error)]
#[error("{status}: {message}")]
pub struct RpcError {
    pub status: StatusCode,
    pub message: String,
}

impl RpcError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    pub fn not_found(message: impl Into<String>) -> Self { Self::new(StatusCode::NOT_FOUND, message) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL) }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message.clone(),
            error: self.status.canonical_reason().unwrap_or("Unknown Error").to_string(),
        }
    }
}

impl From<AuthError> for RpcError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => RpcError::bad_request(msg),
            AuthError::Conflict => RpcError::new(StatusCode::CONFLICT, MSG_USER_EXISTS),
            AuthError::InvalidCredentials => RpcError::bad_request(MSG_INVALID_CREDENTIALS),
            AuthError::Unauthorized => RpcError::new(StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS),
            internal @ (AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_)) => {
                error!(code = internal.code(), error = %internal, "auth operation failed");
                RpcError::internal()
            }
        }
    }
}
