use async_trait::async_trait;

use super::domain::UserRecord;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;
    /// Must fail with `AuthError::Conflict` if `email` is already taken.
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, UserRecord>>, // key: email
    }

    impl MockAuthRepository {
        fn users(&self) -> Result<MutexGuard<'_, HashMap<String, UserRecord>>, AuthError> {
            self.users.lock().map_err(|_| AuthError::Repository("mock store poisoned".into()))
        }

        /// Number of stored users with exactly this email.
        pub fn count_email(&self, email: &str) -> usize {
            self.users().map(|u| u.values().filter(|r| r.email == email).count()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
            Ok(self.users()?.get(email).cloned())
        }

        async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, AuthError> {
            let mut users = self.users()?;
            if users.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let record = UserRecord {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            };
            users.insert(email.to_string(), record.clone());
            Ok(record)
        }
    }
}
