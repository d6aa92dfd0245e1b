//! Show the cart contents.

use anyhow::Result;

use super::ListArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [16, 32, 5, 10];

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.load_cart().await?;

    if args.count {
        if ctx.output.is_json() {
            ctx.output
                .json(&serde_json::json!({ "units": store.item_count() }));
        } else {
            println!("{}", store.item_count());
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(store.items());
        return Ok(());
    }

    if store.items().is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output
        .table_row(&["ID", "TITLE", "QTY", "PRICE"], &WIDTHS);
    for item in store.items() {
        let quantity = item.quantity().to_string();
        let price = item.price.to_string();
        ctx.output.table_row(
            &[item.id.as_str(), item.title.as_str(), quantity.as_str(), price.as_str()],
            &WIDTHS,
        );
    }

    println!();
    ctx.output.kv("Items", &store.items().len().to_string());
    ctx.output.kv("Units", &store.item_count().to_string());
    Ok(())
}
