//! NATS request/reply transport.
//!
//! One queue subscription per pattern; every message is answered from its own
//! task so a slow request never holds up the next one.
use std::sync::Arc;

use async_nats::{Client, ConnectOptions, Message, ServerAddr};
use configs::TransportConfig;
use futures::StreamExt;
use service::auth::{repository::AuthRepository, TokenIssuer};
use tracing::{debug, error, info, warn};

use crate::routes::{Pattern, RpcRouter};

pub const CLIENT_NAME: &str = "auth-service";

pub async fn connect(cfg: &TransportConfig) -> anyhow::Result<Client> {
    let addrs = cfg
        .servers
        .iter()
        .map(|s| s.parse::<ServerAddr>().map_err(|e| anyhow::anyhow!("invalid NATS server {s:?}: {e}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let client = ConnectOptions::new().name(CLIENT_NAME).connect(addrs.as_slice()).await?;
    info!(servers = ?cfg.servers, "connected to NATS");
    Ok(client)
}

/// Serve every `Pattern` until Ctrl-C or until all subscriptions close.
pub async fn serve<R, T>(client: Client, router: Arc<RpcRouter<R, T>>, queue_group: &str) -> anyhow::Result<()>
where
    R: AuthRepository + 'static,
    T: TokenIssuer + 'static,
{
    let mut subscriptions = Vec::with_capacity(Pattern::ALL.len());
    for pattern in Pattern::ALL {
        let sub = client.queue_subscribe(pattern.subject(), queue_group.to_string()).await?;
        info!(subject = pattern.subject(), queue_group, "subscribed");
        subscriptions.push(sub);
    }
    let mut messages = futures::stream::select_all(subscriptions);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            next = messages.next() => {
                let Some(msg) = next else {
                    warn!("all subscriptions closed");
                    break;
                };
                let router = Arc::clone(&router);
                let client = client.clone();
                tokio::spawn(async move { respond(client, router, msg).await });
            }
            _ = &mut shutdown => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    client.flush().await?;
    Ok(())
}

async fn respond<R, T>(client: Client, router: Arc<RpcRouter<R, T>>, msg: Message)
where
    R: AuthRepository,
    T: TokenIssuer,
{
    let reply = router.handle(msg.subject.as_str(), &msg.payload).await;
    let Some(reply_to) = msg.reply else {
        debug!(subject = %msg.subject, "message without reply subject; response dropped");
        return;
    };
    match serde_json::to_vec(&reply) {
        Ok(bytes) => {
            if let Err(e) = client.publish(reply_to, bytes.into()).await {
                warn!(subject = %msg.subject, error = %e, "failed to publish reply");
            }
        }
        Err(e) => error!(subject = %msg.subject, error = %e, "failed to encode reply"),
    }
}
