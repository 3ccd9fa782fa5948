use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use service::auth::{
    domain::{AuthSession, LoginInput, RegisterInput},
    repository::AuthRepository,
    password::check_password_length,
    AuthService, TokenIssuer,
};
use tracing::error;

use models::user::{validate_email, validate_name};

use crate::errors::RpcError;

#[derive(Debug, Deserialize)]
pub struct RegisterUserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUserPayload {
    pub email: String,
    pub password: String,
}

/// `{ "token": "..." }` or the bare token string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VerifyTokenPayload {
    Wrapped { token: String },
    Bare(String),
}

fn parse<P: DeserializeOwned>(data: Value) -> Result<P, RpcError> {
    serde_json::from_value(data).map_err(|e| RpcError::bad_request(format!("invalid payload: {e}")))
}

fn require_password(password: &str) -> Result<(), RpcError> {
    if password.is_empty() {
        return Err(RpcError::bad_request("password should not be empty"));
    }
    Ok(())
}

fn reply<S: Serialize>(value: &S) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "failed to encode reply");
        RpcError::internal()
    })
}

impl RegisterUserPayload {
    pub fn validate(self) -> Result<RegisterInput, RpcError> {
        validate_name(&self.name).map_err(|e| RpcError::bad_request(validation_message(e)))?;
        validate_email(&self.email).map_err(|e| RpcError::bad_request(validation_message(e)))?;
        require_password(&self.password)?;
        check_password_length(&self.password)?;
        Ok(RegisterInput { name: self.name, email: self.email, password: self.password })
    }
}

impl LoginUserPayload {
    pub fn validate(self) -> Result<LoginInput, RpcError> {
        validate_email(&self.email).map_err(|e| RpcError::bad_request(validation_message(e)))?;
        require_password(&self.password)?;
        Ok(LoginInput { email: self.email, password: self.password })
    }
}

impl VerifyTokenPayload {
    pub fn validate(self) -> Result<String, RpcError> {
        let token = match self {
            VerifyTokenPayload::Wrapped { token } | VerifyTokenPayload::Bare(token) => token,
        };
        if token.trim().is_empty() {
            return Err(RpcError::bad_request("token should not be empty"));
        }
        Ok(token)
    }
}

fn validation_message(e: models::errors::ModelError) -> String {
    match e {
        models::errors::ModelError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

pub async fn register<R: AuthRepository, T: TokenIssuer>(svc: &AuthService<R, T>, data: Value) -> Result<Value, RpcError> {
    let input = parse::<RegisterUserPayload>(data)?.validate()?;
    let session: AuthSession = svc.register(input).await?;
    reply(&session)
}

pub async fn login<R: AuthRepository, T: TokenIssuer>(svc: &AuthService<R, T>, data: Value) -> Result<Value, RpcError> {
    let input = parse::<LoginUserPayload>(data)?.validate()?;
    let session = svc.login(input).await?;
    reply(&session)
}

pub async fn verify<R: AuthRepository, T: TokenIssuer>(svc: &AuthService<R, T>, data: Value) -> Result<Value, RpcError> {
    let token = parse::<VerifyTokenPayload>(data)?.validate()?;
    let session = svc.verify(&token).await?;
    reply(&session)
}
