use std::sync::Arc;

use configs::AppConfig;
use migration::MigratorTrait;
use tracing::info;

use service::auth::{repo::seaorm::SeaOrmAuthRepository, AuthService, JwtTokenIssuer};

use crate::routes::RpcRouter;
use crate::transport;

/// Public entry: load config, wire the service and serve the message patterns
/// Expects `.env` and logging to be set up by the caller.
pub async fn run() -> anyhow::Result<()> {
    // Fails fast before anything is connected
    let cfg = AppConfig::load_and_validate()?;
    info!(port = cfg.server.port, servers = ?cfg.transport.servers, "configuration loaded");

    // DB connection + schema
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmAuthRepository::new(db));
    let auth = Arc::new(AuthService::new(repo, JwtTokenIssuer::new(&cfg.auth.jwt_secret)));
    let router = Arc::new(RpcRouter::new(auth));

    let client = transport::connect(&cfg.transport).await?;
    info!(queue_group = %cfg.transport.queue_group, "auth microservice running");
    transport::serve(client, router, &cfg.transport.queue_group).await?;
    info!("auth microservice stopped");
    Ok(())
}
