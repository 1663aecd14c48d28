use crate::shared::api;
use contracts::dashboards::d400_overview::{CategoriesCount, ProductsCount, RecentProducts};

pub async fn fetch_products_count() -> Result<ProductsCount, String> {
    api::get_json("/api/dashboard/products-count").await
}

pub async fn fetch_categories_count() -> Result<CategoriesCount, String> {
    api::get_json("/api/dashboard/categories-count").await
}

pub async fn fetch_recent_products() -> Result<RecentProducts, String> {
    api::get_json("/api/dashboard/recent-products").await
}
