use crate::shared::api;
use contracts::domain::a001_category::{Category, CategoryCreate, CategoryUpdate};
use uuid::Uuid;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    api::get_json("/api/categories").await
}

pub async fn create_category(body: &CategoryCreate) -> Result<Category, String> {
    api::post_json("/api/categories", body).await
}

pub async fn update_category(id: Uuid, body: &CategoryUpdate) -> Result<Category, String> {
    api::put_json(&format!("/api/categories/{}", id), body).await
}

pub async fn delete_category(id: Uuid) -> Result<(), String> {
    api::delete(&format!("/api/categories/{}", id)).await
}
