//! Restaurant / menu item / modifier database operations

use rust_decimal::Decimal;
use sqlx::SqliteConnection;

use super::{BoxError, decimal_column};

// ── Read Types ──

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RestaurantRow {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    category: String,
    price: String,
    available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub available: bool,
}

impl TryFrom<MenuItemRow> for MenuItemRecord {
    type Error = BoxError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            price: decimal_column(&row.price, "menu_items.price")?,
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            available: row.available,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ItemModifierRow {
    menu_item_id: i64,
    id: i64,
    name: String,
    price: String,
}

/// Modifier linked to a menu item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemModifierRecord {
    pub menu_item_id: i64,
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

// ── Catalog Read ──

pub async fn find_restaurant_by_slug(
    conn: &mut SqliteConnection,
    slug: &str,
) -> Result<Option<RestaurantRow>, BoxError> {
    let row = sqlx::query_as("SELECT id, slug, name FROM restaurants WHERE slug = ?")
        .bind(slug)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

/// Available items of a restaurant, ordered by (category, name)
pub async fn list_available_items(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<Vec<MenuItemRecord>, BoxError> {
    let rows: Vec<MenuItemRow> = sqlx::query_as(
        r#"
        SELECT id, name, description, category, price, available
        FROM menu_items
        WHERE restaurant_id = ? AND available = 1
        ORDER BY category, name, id
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;

    rows.into_iter().map(MenuItemRecord::try_from).collect()
}

/// Item → modifier links for one restaurant, in link order
pub async fn list_item_modifiers(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<Vec<ItemModifierRecord>, BoxError> {
    let rows: Vec<ItemModifierRow> = sqlx::query_as(
        r#"
        SELECT l.menu_item_id, m.id, m.name, m.price
        FROM menu_item_modifiers l
        JOIN modifiers m ON m.id = l.modifier_id
        WHERE m.restaurant_id = ?
        ORDER BY l.id
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;

    rows.into_iter()
        .map(|r| {
            Ok(ItemModifierRecord {
                price: decimal_column(&r.price, "modifiers.price")?,
                menu_item_id: r.menu_item_id,
                id: r.id,
                name: r.name,
            })
        })
        .collect()
}

/// Current catalog price of a menu item
pub async fn find_item_price(
    conn: &mut SqliteConnection,
    item_id: i64,
) -> Result<Option<Decimal>, BoxError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT price FROM menu_items WHERE id = ?")
        .bind(item_id)
        .fetch_optional(conn)
        .await?;
    row.map(|(p,)| decimal_column(&p, "menu_items.price"))
        .transpose()
}

/// Current catalog price of a modifier
pub async fn find_modifier_price(
    conn: &mut SqliteConnection,
    modifier_id: i64,
) -> Result<Option<Decimal>, BoxError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT price FROM modifiers WHERE id = ?")
        .bind(modifier_id)
        .fetch_optional(conn)
        .await?;
    row.map(|(p,)| decimal_column(&p, "modifiers.price"))
        .transpose()
}

// ── Catalog Write (seed import) ──

pub async fn upsert_restaurant(
    conn: &mut SqliteConnection,
    slug: &str,
    name: &str,
    now: i64,
) -> Result<i64, BoxError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO restaurants (slug, name, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT (slug) DO UPDATE SET name = excluded.name
        RETURNING id
        "#,
    )
    .bind(slug)
    .bind(name)
    .bind(now)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Insert or update a modifier owned by `restaurant_id`.
///
/// Returns `false` when the id already belongs to another restaurant; that
/// row is left untouched.
pub async fn upsert_modifier(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
    id: i64,
    name: &str,
    price: Decimal,
    now: i64,
) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        INSERT INTO modifiers (id, restaurant_id, name, price, created_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            price = excluded.price
        WHERE modifiers.restaurant_id = excluded.restaurant_id
        "#,
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(name)
    .bind(price.to_string())
    .bind(now)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Insert or update a menu item owned by `restaurant_id`.
///
/// Returns `false` when the id already belongs to another restaurant.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_menu_item(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
    id: i64,
    name: &str,
    description: Option<&str>,
    category: &str,
    price: Decimal,
    available: bool,
    now: i64,
) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        INSERT INTO menu_items (id, restaurant_id, name, description, category, price, available, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            description = excluded.description,
            category = excluded.category,
            price = excluded.price,
            available = excluded.available
        WHERE menu_items.restaurant_id = excluded.restaurant_id
        "#,
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(name)
    .bind(description)
    .bind(category)
    .bind(price.to_string())
    .bind(available)
    .bind(now)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Drop every item → modifier link of a restaurant
pub async fn clear_item_modifier_links(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<(), BoxError> {
    sqlx::query(
        r#"
        DELETE FROM menu_item_modifiers
        WHERE menu_item_id IN (SELECT id FROM menu_items WHERE restaurant_id = ?)
        "#,
    )
    .bind(restaurant_id)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn link_item_modifier(
    conn: &mut SqliteConnection,
    menu_item_id: i64,
    modifier_id: i64,
) -> Result<(), BoxError> {
    sqlx::query(
        "INSERT INTO menu_item_modifiers (menu_item_id, modifier_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
    )
    .bind(menu_item_id)
    .bind(modifier_id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Hide every item of a restaurant; the import re-enables what it lists.
///
/// Items are never deleted so historical order lines keep their reference.
pub async fn mark_all_items_unavailable(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<u64, BoxError> {
    let result = sqlx::query("UPDATE menu_items SET available = 0 WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
