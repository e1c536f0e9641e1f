//! Command execution.

use crate::Command;
use anyhow::{bail, Context};
use quill_cache::{CacheService, CacheStore};
use quill_core::UserId;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const NIL: &str = "(nil)";

/// Run `command` against `service` and return the text to print.
pub async fn execute(service: &CacheService, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Ping => {
            service.store().ping().await.context("store did not answer")?;
            if service.store().is_enabled() {
                Ok("PONG".to_string())
            } else {
                Ok("PONG (cache disabled)".to_string())
            }
        }
        Command::Keys { user_id, phone } => keys(service, user_id, phone.as_deref()),
        Command::Get { key } => Ok(service.get_cache(&key).await?.unwrap_or_else(|| NIL.to_string())),
        Command::Set { key, value, ttl } => {
            if ttl == 0 {
                bail!("ttl must be at least one second");
            }
            service
                .set_cache(&key, &value, Duration::from_secs(ttl))
                .await?;
            info!(key = %key, ttl, "Wrote cache key");
            Ok("OK".to_string())
        }
        Command::Del { key } => Ok(deleted(service.del_cache(&key).await?)),
        Command::User { id } => pretty(service.get_user(UserId(id)).await?),
        Command::Token { id } => Ok(service
            .get_user_token(UserId(id))
            .await?
            .unwrap_or_else(|| NIL.to_string())),
        Command::SignupCode { phone } => Ok(service
            .get_signup_code(&phone)
            .await?
            .unwrap_or_else(|| NIL.to_string())),
        Command::Article { user_id } => pretty(service.get_publish_article(UserId(user_id)).await?),
        Command::Categories => pretty(service.get_categories().await?),
        Command::Evict { user_id } => {
            let id = UserId(user_id);
            let mut removed = 0;
            for existed in [
                service.delete_user(id).await?,
                service.delete_user_token(id).await?,
                service.delete_publish_article(id).await?,
            ] {
                if existed {
                    removed += 1;
                }
            }
            info!(user_id, removed, "Evicted user entries");
            Ok(format!("(integer) {}", removed))
        }
    }
}

fn keys(service: &CacheService, user_id: Option<u64>, phone: Option<&str>) -> anyhow::Result<String> {
    if user_id.is_none() && phone.is_none() {
        bail!("pass --user-id and/or --phone");
    }

    let keys = service.keys();
    let mut lines = Vec::new();
    if let Some(id) = user_id.map(UserId) {
        lines.push(keys.user(id));
        lines.push(keys.user_token(id));
        lines.push(keys.publish_article(id));
    }
    if let Some(phone) = phone {
        lines.push(keys.signup_code(phone));
    }
    lines.push(keys.categories());

    Ok(lines.join("\n"))
}

fn deleted(existed: bool) -> String {
    format!("(integer) {}", u8::from(existed))
}

fn pretty<T: Serialize>(value: Option<T>) -> anyhow::Result<String> {
    match value {
        Some(value) => serde_json::to_string_pretty(&value).context("failed to render value"),
        None => Ok(NIL.to_string()),
    }
}
