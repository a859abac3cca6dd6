//! Catalog import from a JSON document
//!
//! ```json
//! {
//!   "restaurant": { "slug": "demo-bistro", "name": "Demo Bistro" },
//!   "modifiers": [{ "id": 1, "name": "Extra Cheese", "price": 2.5 }],
//!   "items": [{ "id": 1, "name": "Burger", "category": "Mains", "price": 15.0, "modifier_ids": [1] }]
//! }
//! ```
//!
//! Ids come from the document, so re-importing the same file is idempotent.
//! Items missing from the document are marked unavailable, not deleted,
//! because historical order lines still reference them.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::error::AppError;
use sqlx::SqlitePool;

use crate::db::{self, UnitOfWork};
use crate::error::ServiceResult;
use crate::validation::{MAX_IDENT_LEN, validate_required_text};

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRestaurant {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedModifier {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub modifier_ids: Vec<i64>,
}

fn default_available() -> bool {
    true
}

/// One restaurant's catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSeed {
    pub restaurant: SeedRestaurant,
    #[serde(default)]
    pub modifiers: Vec<SeedModifier>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// What an import wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub restaurant_id: i64,
    pub modifiers: usize,
    pub items: usize,
    pub links: usize,
}

impl CatalogSeed {
    /// Structural checks: names present, prices non-negative, links resolvable
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.restaurant.slug, "restaurant.slug", MAX_IDENT_LEN)?;
        validate_required_text(&self.restaurant.name, "restaurant.name", MAX_IDENT_LEN)?;

        let mut modifier_ids = HashSet::new();
        for m in &self.modifiers {
            if m.name.trim().is_empty() || m.price.is_sign_negative() {
                return Err(AppError::validation(format!("invalid modifier {}", m.id))
                    .with_detail("modifier_id", m.id));
            }
            if !modifier_ids.insert(m.id) {
                return Err(AppError::validation(format!("duplicate modifier id {}", m.id)));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if item.name.trim().is_empty()
                || item.category.trim().is_empty()
                || item.price.is_sign_negative()
            {
                return Err(AppError::validation(format!("invalid menu item {}", item.id))
                    .with_detail("item_id", item.id));
            }
            if !item_ids.insert(item.id) {
                return Err(AppError::validation(format!("duplicate menu item id {}", item.id)));
            }
            if let Some(missing) = item.modifier_ids.iter().find(|id| !modifier_ids.contains(*id)) {
                return Err(AppError::validation(format!(
                    "menu item {} links unknown modifier {missing}",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

/// Upsert the restaurant, its modifiers, items and links in one transaction
pub async fn import_catalog(
    pool: &SqlitePool,
    seed: &CatalogSeed,
    now: i64,
) -> ServiceResult<SeedReport> {
    seed.validate()?;

    let mut uow = UnitOfWork::begin_write(pool).await?;
    let restaurant_id = db::catalog::upsert_restaurant(
        uow.conn(),
        &seed.restaurant.slug,
        &seed.restaurant.name,
        now,
    )
    .await?;

    for m in &seed.modifiers {
        let owned =
            db::catalog::upsert_modifier(uow.conn(), restaurant_id, m.id, &m.name, m.price, now)
                .await?;
        if !owned {
            return Err(AppError::validation(format!(
                "modifier {} belongs to another restaurant",
                m.id
            ))
            .with_detail("modifier_id", m.id)
            .into());
        }
    }

    let hidden = db::catalog::mark_all_items_unavailable(uow.conn(), restaurant_id).await?;
    db::catalog::clear_item_modifier_links(uow.conn(), restaurant_id).await?;

    let mut links = 0;
    for item in &seed.items {
        let owned = db::catalog::upsert_menu_item(
            uow.conn(),
            restaurant_id,
            item.id,
            &item.name,
            item.description.as_deref(),
            &item.category,
            item.price,
            item.available,
            now,
        )
        .await?;
        if !owned {
            return Err(AppError::validation(format!(
                "menu item {} belongs to another restaurant",
                item.id
            ))
            .with_detail("item_id", item.id)
            .into());
        }
        for &modifier_id in &item.modifier_ids {
            db::catalog::link_item_modifier(uow.conn(), item.id, modifier_id).await?;
            links += 1;
        }
    }
    uow.commit().await?;

    let report = SeedReport {
        restaurant_id,
        modifiers: seed.modifiers.len(),
        items: seed.items.len(),
        links,
    };
    tracing::info!(
        restaurant_slug = %seed.restaurant.slug,
        restaurant_id,
        modifiers = report.modifiers,
        items = report.items,
        links = report.links,
        previously_listed = hidden,
        "Catalog imported"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CatalogSeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let seed = parse(
            r#"{
                "restaurant": {"slug": "demo", "name": "Demo"},
                "items": [{"id": 1, "name": "Soup", "category": "Starters", "price": "4.50"}]
            }"#,
        );
        assert!(seed.modifiers.is_empty());
        assert!(seed.items[0].available);
        assert!(seed.items[0].modifier_ids.is_empty());
        assert_eq!(seed.items[0].price, Decimal::new(450, 2));
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_modifier_link() {
        let seed = parse(
            r#"{
                "restaurant": {"slug": "demo", "name": "Demo"},
                "modifiers": [{"id": 1, "name": "Cheese", "price": 1}],
                "items": [{"id": 1, "name": "Soup", "category": "Starters", "price": 4, "modifier_ids": [2]}]
            }"#,
        );
        let err = seed.validate().unwrap_err();
        assert_eq!(err.message, "menu item 1 links unknown modifier 2");
    }

    #[test]
    fn test_rejects_negative_price() {
        let seed = parse(
            r#"{
                "restaurant": {"slug": "demo", "name": "Demo"},
                "items": [{"id": 7, "name": "Soup", "category": "Starters", "price": "-1"}]
            }"#,
        );
        assert!(seed.validate().is_err());
    }
}
