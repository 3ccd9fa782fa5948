//! Database-backed tests. They skip when `SKIP_DB_TESTS` is set, when no
//! `DATABASE_URL` is configured, or when the database cannot be reached.
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{db, errors::ModelError, user};

async fn test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    let cfg = DatabaseConfig { url, min_connections: 1, connect_timeout_secs: 5, acquire_timeout_secs: 5, ..DatabaseConfig::default() };
    let db = match db::connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn create_then_find_by_email() {
    let Some(db) = test_db().await else { return };
    let email = format!("models_{}@example.com", Uuid::new_v4());

    let created = user::create(&db, "Model User", &email, "$2b$10$hash").await.expect("create user");
    let found = user::find_by_email(&db, &email).await.expect("find").expect("present");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password, "$2b$10$hash");

    user::Entity::delete_by_id(created.id).exec(&db).await.expect("cleanup");
}

#[tokio::test]
async fn duplicate_email_is_reported_as_duplicate() {
    let Some(db) = test_db().await else { return };
    let email = format!("dup_{}@example.com", Uuid::new_v4());

    let first = user::create(&db, "One", &email, "$2b$10$hash").await.expect("create user");
    let second = user::create(&db, "Two", &email, "$2b$10$hash").await;
    assert!(matches!(second, Err(ModelError::Duplicate(_))));

    user::Entity::delete_by_id(first.id).exec(&db).await.expect("cleanup");
}

#[tokio::test]
async fn unknown_email_is_absent() {
    let Some(db) = test_db().await else { return };
    let missing = user::find_by_email(&db, &format!("none_{}@example.com", Uuid::new_v4())).await.expect("query");
    assert!(missing.is_none());
}
