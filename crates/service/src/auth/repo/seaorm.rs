use sea_orm::DatabaseConnection;

use crate::auth::domain::UserRecord;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_record(u: models::user::Model) -> UserRecord {
    UserRecord { id: u.id, name: u.name, email: u.email, password_hash: u.password }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        let res = models::user::find_by_email(&self.db, email).await?;
        Ok(res.map(to_record))
    }

    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, AuthError> {
        let created = models::user::create(&self.db, name, email, password_hash).await?;
        Ok(to_record(created))
    }
}
