//! Cart mutation commands: add, increment, decrement.

use anyhow::{Context as _, Result};
use marketplace_cart::{CartChange, CartStore, NewCartItem, ProductId};
use marketplace_kv::KvStore;

use super::{AddArgs, QuantityArgs};
use crate::context::Context;
use crate::output::{change_label, describe_change};

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.load_cart().await?;
    let id = args.id.clone();

    let change = store
        .add_to_cart(NewCartItem::new(args.id, args.title, args.image_url, args.price))
        .await
        .with_context(|| format!("Failed to add {} to the cart", id))?;

    report(ctx, &store, &id, change);
    Ok(())
}

/// Run the increment command.
pub async fn increment(args: QuantityArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.load_cart().await?;
    let id = ProductId::new(args.id);

    let change = store
        .increment(&id)
        .await
        .with_context(|| format!("Failed to increment {}", id))?;

    report(ctx, &store, id.as_str(), change);
    Ok(())
}

/// Run the decrement command.
pub async fn decrement(args: QuantityArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.load_cart().await?;
    let id = ProductId::new(args.id);

    let change = store
        .decrement(&id)
        .await
        .with_context(|| format!("Failed to decrement {}", id))?;

    report(ctx, &store, id.as_str(), change);
    Ok(())
}

fn report<S: KvStore>(ctx: &Context, store: &CartStore<S>, id: &str, change: CartChange) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "change": change_label(change),
            "id": id,
            "items": store.items(),
        }));
        return;
    }

    let message = describe_change(change, id);
    if change.is_change() {
        ctx.output.success(&message);
    } else {
        ctx.output.warn(&message);
    }
    ctx.output
        .debug(&format!("Persisted to {}", store.storage_key()));
}
