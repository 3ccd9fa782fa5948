//! Message-pattern routing: maps an inbound subject to its handler and wraps
//! the outcome in an `RpcReply`.
use std::sync::Arc;
use std::time::Instant;

use common::types::{RpcPacket, RpcReply};
use serde_json::Value;
use service::auth::{repository::AuthRepository, AuthService, TokenIssuer};
use tracing::{debug, warn};

use crate::errors::RpcError;

pub mod auth;

/// Message patterns served by this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    RegisterUser,
    LoginUser,
    VerifyUser,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::RegisterUser, Pattern::LoginUser, Pattern::VerifyUser];

    pub fn subject(self) -> &'static str {
        match self {
            Pattern::RegisterUser => "auth.register.user",
            Pattern::LoginUser => "auth.login.user",
            Pattern::VerifyUser => "auth.verify.user",
        }
    }

    pub fn from_subject(subject: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.subject() == subject)
    }
}

pub struct RpcRouter<R: AuthRepository, T: TokenIssuer> {
    auth: Arc<AuthService<R, T>>,
}

impl<R: AuthRepository, T: TokenIssuer> RpcRouter<R, T> {
    pub fn new(auth: Arc<AuthService<R, T>>) -> Self { Self { auth } }

    pub async fn dispatch(&self, pattern: Pattern, data: Value) -> Result<Value, RpcError> {
        match pattern {
            Pattern::RegisterUser => auth::register(&self.auth, data).await,
            Pattern::LoginUser => auth::login(&self.auth, data).await,
            Pattern::VerifyUser => auth::verify(&self.auth, data).await,
        }
    }

    /// Decode one raw message received on `subject` and produce its reply.
    /// The subject alone selects the handler.
    pub async fn handle(&self, subject: &str, payload: &[u8]) -> RpcReply {
        let packet: RpcPacket = match serde_json::from_slice(payload) {
            Ok(p) => p,
            Err(e) => {
                warn!(subject, error = %e, "malformed rpc packet");
                return RpcReply::err(None, RpcError::bad_request(format!("malformed message: {e}")).body());
            }
        };

        let Some(pattern) = Pattern::from_subject(subject) else {
            warn!(subject, "no handler for subject");
            let err = RpcError::not_found(format!("There is no matching message handler defined for \"{subject}\""));
            return RpcReply::err(packet.id, err.body());
        };

        let started = Instant::now();
        let outcome = self.dispatch(pattern, packet.data).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match outcome {
            Ok(response) => {
                debug!(subject = pattern.subject(), elapsed_ms, "rpc ok");
                RpcReply::ok(packet.id, response)
            }
            Err(e) => {
                debug!(subject = pattern.subject(), elapsed_ms, status = e.status.as_u16(), "rpc failed");
                RpcReply::err(packet.id, e.body())
            }
        }
    }
}
