//! Delete the persisted cart.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use marketplace_kv::KvStore;

use super::ResetArgs;
use crate::context::Context;

/// Run the reset command.
pub async fn run(args: ResetArgs, ctx: &Context) -> Result<()> {
    let key = &ctx.config.store.storage_key;
    let storage = ctx.open_storage().await?;

    if !storage.exists(key).await? {
        ctx.output.info("No persisted cart to remove.");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete the persisted cart under {}?", key))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            ctx.output.info("Reset cancelled.");
            return Ok(());
        }
    }

    storage
        .delete(key)
        .await
        .with_context(|| format!("Failed to delete {}", key))?;
    tracing::info!(key = %key, "persisted cart removed");
    ctx.output.success("Cart reset.");
    Ok(())
}
