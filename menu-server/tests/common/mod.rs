//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::str::FromStr;

use menu_server::Config;
use menu_server::db;
use menu_server::seed::{self, CatalogSeed};
use rust_decimal::Decimal;
use shared::models::OrderLineInput;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fixed clock for service-level tests (unix millis)
pub const NOW: i64 = 1_700_000_000_000;

pub const ADMIN_KEY: &str = "test-admin-key";

/// File-backed database in a temp dir, migrated
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("menu.db").display());
    let pool = db::connect(&url, 4).await.unwrap();
    TestDb { pool, _dir: dir }
}

/// Database with the reference catalog imported
pub async fn setup_with_menu() -> TestDb {
    let db = setup().await;
    seed::import_catalog(&db.pool, &catalog(), NOW).await.unwrap();
    db
}

/// Burger 15.00 (Extra Cheese 2.50, Add Bacon 3.00), Salad 10.00,
/// and an unavailable Seasonal Pie.
pub fn catalog() -> CatalogSeed {
    catalog_with_burger_price("15.00")
}

pub fn catalog_with_burger_price(price: &str) -> CatalogSeed {
    serde_json::from_value(serde_json::json!({
        "restaurant": { "slug": "demo-bistro", "name": "Demo Bistro" },
        "modifiers": [
            { "id": 10, "name": "Extra Cheese", "price": "2.50" },
            { "id": 11, "name": "Add Bacon", "price": "3.00" }
        ],
        "items": [
            {
                "id": 1,
                "name": "Burger",
                "description": "Beef patty",
                "category": "Mains",
                "price": price,
                "modifier_ids": [10, 11]
            },
            { "id": 2, "name": "Salad", "category": "Starters", "price": "10.00" },
            {
                "id": 3,
                "name": "Seasonal Pie",
                "category": "Desserts",
                "price": "7.00",
                "available": false
            }
        ]
    }))
    .unwrap()
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        http_port: 0,
        environment: "development".into(),
        admin_key: ADMIN_KEY.into(),
        session_ttl: chrono::Duration::minutes(120),
        log_dir: None,
    }
}

pub fn ttl() -> chrono::Duration {
    chrono::Duration::minutes(120)
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn line(item_id: i64, quantity: i32, modifier_ids: &[i64]) -> OrderLineInput {
    OrderLineInput {
        item_id,
        quantity,
        modifier_ids: (!modifier_ids.is_empty()).then(|| modifier_ids.to_vec()),
        note: None,
    }
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

pub async fn set_status(pool: &SqlitePool, order_id: i64, status: &str) {
    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(order_id)
        .execute(pool)
        .await
        .unwrap();
}
