//! Import a restaurant catalog from JSON
//!
//! Usage: `seed-menu <catalog.json>` (uses `DATABASE_URL`)

use anyhow::{Context, bail};
use menu_server::seed::{self, CatalogSeed};
use menu_server::{Config, db, util};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    util::init_logger(None);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: seed-menu <catalog.json>");
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let catalog: CatalogSeed =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {e}"))?;
    let pool = db::connect(&config.database_url, 1)
        .await
        .map_err(|e| anyhow::anyhow!("database: {e}"))?;

    let report = seed::import_catalog(&pool, &catalog, util::now_millis())
        .await
        .with_context(|| format!("importing {path}"))?;

    println!(
        "Imported '{}': {} items, {} modifiers, {} links",
        catalog.restaurant.slug, report.items, report.modifiers, report.links
    );
    Ok(())
}
