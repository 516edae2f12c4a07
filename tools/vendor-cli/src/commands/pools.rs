use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use vendor_commerce::catalog::Language;
use vendor_commerce::pooling::{BulkPool, PoolBoard};
use vendor_commerce::PoolId;
use wholesale_storefront::StorefrontData;

use super::{resolve_language, PoolsArgs};
use crate::context::Context;
use crate::output::status_badge;

const POOL_WIDTHS: [usize; 7] = [4, 18, 18, 8, 8, 10, 10];

pub async fn run(args: PoolsArgs, ctx: &Context) -> Result<()> {
    let lang = resolve_language(args.lang.as_deref(), ctx)?;
    let now = Utc::now();
    let mut data = StorefrontData::seed(now);

    if let Some(id) = &args.join {
        join_pool(&mut data.pools, id, args.quantity, ctx)?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&data.pools);
        return Ok(());
    }

    print_pools(&data.pools, now, lang, ctx);
    Ok(())
}

fn join_pool(pools: &mut [BulkPool], id: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let pool_id = PoolId::new(id);
    let pool = pools
        .iter_mut()
        .find(|p| p.id == pool_id)
        .ok_or_else(|| anyhow!("No pool with id '{}'", id))?;

    let contributed = pool.join(quantity)?;
    ctx.output.success(&format!(
        "Joined {} with {} kg (you save {})",
        pool.name,
        contributed,
        pool.member_savings().display()
    ));
    Ok(())
}

/// Print the pool board, shared with the interactive shop.
pub fn print_pools(pools: &[BulkPool], now: DateTime<Utc>, lang: Language, ctx: &Context) {
    let board = PoolBoard::from_pools(pools);

    ctx.output.header("Group Buying Pools");
    ctx.output.kv("Joined", &board.joined_count.to_string());
    ctx.output.kv("Available", &board.available_count.to_string());
    ctx.output.kv("Potential savings", &board.potential_savings.display());
    ctx.output.info("");

    ctx.output.table_row(
        &["ID", "PRODUCT", "PROGRESS", "PRICE", "GROUP", "CLOSES", "STATUS"],
        &POOL_WIDTHS,
    );
    ctx.output.info(&"-".repeat(86));

    for pool in pools {
        let name = match lang {
            Language::Hi => &pool.name_hi,
            _ => &pool.name,
        };
        let progress = format!(
            "{}/{} kg ({:.0}%)",
            pool.current_quantity,
            pool.target_quantity,
            pool.display_progress()
        );
        let price = pool.target_price.display();
        let group = format!("{}/{}", pool.participants, pool.max_participants);
        let closes = pool.time_remaining(now).label();
        let status = status_badge(pool_status(pool));

        ctx.output.table_row(
            &[pool.id.as_str(), name, &progress, &price, &group, &closes, &status],
            &POOL_WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} pool(s)", pools.len()));
}

fn pool_status(pool: &BulkPool) -> &'static str {
    if pool.is_joined {
        "joined"
    } else if pool.is_complete() {
        "complete"
    } else if pool.participants >= pool.max_participants {
        "full"
    } else {
        "open"
    }
}
