//! Guest menu read path

use std::collections::HashMap;

use shared::error::{AppError, ErrorCode};
use shared::models::{MenuItemView, MenuModifier, MenuResponse, RestaurantInfo};
use sqlx::SqlitePool;

use crate::db::{self, UnitOfWork};
use crate::error::ServiceResult;

/// Available items of a restaurant ordered by (category, name), each with its
/// linked modifiers (`None` when it has none).
pub async fn get_menu(pool: &SqlitePool, slug: &str) -> ServiceResult<MenuResponse> {
    let mut uow = UnitOfWork::begin(pool).await?;

    let restaurant = db::catalog::find_restaurant_by_slug(uow.conn(), slug)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RestaurantNotFound).with_detail("restaurant_slug", slug)
        })?;

    let items = db::catalog::list_available_items(uow.conn(), restaurant.id).await?;
    let links = db::catalog::list_item_modifiers(uow.conn(), restaurant.id).await?;
    uow.commit().await?;

    let mut by_item: HashMap<i64, Vec<MenuModifier>> = HashMap::new();
    for link in links {
        by_item.entry(link.menu_item_id).or_default().push(MenuModifier {
            id: link.id,
            name: link.name,
            price: link.price,
        });
    }

    let items = items
        .into_iter()
        .map(|item| MenuItemView {
            modifiers: by_item.remove(&item.id),
            id: item.id,
            name: item.name,
            description: item.description,
            category: item.category,
            price: item.price,
            available: item.available,
        })
        .collect();

    Ok(MenuResponse {
        restaurant: RestaurantInfo {
            id: restaurant.id,
            slug: restaurant.slug,
            name: restaurant.name,
        },
        items,
    })
}
