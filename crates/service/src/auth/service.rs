use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{AuthSession, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::password::{check_password_length, hash_password, verify_dummy, verify_password};
use super::repository::AuthRepository;
use super::token::TokenIssuer;

/// Auth business service independent of the transport
pub struct AuthService<R: AuthRepository, T: TokenIssuer> {
    repo: Arc<R>,
    tokens: T,
}

impl<R: AuthRepository, T: TokenIssuer> AuthService<R, T> {
    pub fn new(repo: Arc<R>, tokens: T) -> Self { Self { repo, tokens } }

    /// Register a new user with a hashed password and issue a token for it.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository, JwtTokenIssuer};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, JwtTokenIssuer::new("secret"));
    /// let input = RegisterInput { name: "A".into(), email: "a@x.com".into(), password: "pw".into() };
    /// let session = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(session.user.email, "a@x.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AuthError> {
        check_password_length(&input.password)?;
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!(user_id = %existing.id, "email already registered");
            return Err(AuthError::Conflict);
        }

        let hash = hash_password(&input.password)?;
        // The unique index still answers `Conflict` if a concurrent register won.
        let user = self.repo.create_user(&input.name, &input.email, &hash).await?.into_public();
        let token = self.tokens.sign(&user)?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(AuthSession { user, token })
    }

    /// Check credentials and issue a token. Unknown email and wrong password
    /// both yield `AuthError::InvalidCredentials`.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let Some(record) = self.repo.find_user_by_email(&input.email).await? else {
            debug!("login for unknown email");
            verify_dummy(&input.password);
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(&input.password, &record.password_hash)? {
            debug!(user_id = %record.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let user = record.into_public();
        let token = self.tokens.sign(&user)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    /// Verify `token` and re-issue a fresh one over the same claims.
    #[instrument(skip_all)]
    pub async fn verify(&self, token: &str) -> Result<AuthSession, AuthError> {
        let claims = self.tokens.verify(token)?;
        let user = claims.user();
        let token = self.tokens.sign(&user)?;
        info!(user_id = %user.id, "token_refreshed");
        Ok(AuthSession { user, token })
    }
}
