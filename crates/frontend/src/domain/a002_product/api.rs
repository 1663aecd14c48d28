use crate::shared::api;
use contracts::domain::a002_product::{Product, ProductCreate, ProductPatch, ProductUpdate};
use contracts::shared::pagination::PagedResponse;
use uuid::Uuid;

/// Страница списка блюд с серверной пагинацией и поиском.
pub async fn fetch_products(
    page: usize,
    limit: usize,
    q: &str,
) -> Result<PagedResponse<Product>, String> {
    let mut path = format!("/api/products?page={}&limit={}", page, limit);
    if !q.is_empty() {
        path.push_str(&format!("&q={}", urlencoding::encode(q)));
    }
    api::get_json(&path).await
}

pub async fn create_product(body: &ProductCreate) -> Result<Product, String> {
    api::post_json("/api/products", body).await
}

pub async fn update_product(id: Uuid, body: &ProductUpdate) -> Result<Product, String> {
    api::put_json(&format!("/api/products/{}", id), body).await
}

pub async fn set_availability(id: Uuid, is_available: bool) -> Result<Product, String> {
    let body = ProductPatch {
        is_available: Some(is_available),
        ..ProductPatch::default()
    };
    api::patch_json(&format!("/api/products/{}", id), &body).await
}

pub async fn delete_product(id: Uuid) -> Result<(), String> {
    api::delete(&format!("/api/products/{}", id)).await
}
