//! DTO сводного дашборда админки: счётчики и последние добавленные позиции.

use crate::domain::a002_product::Product;
use serde::{Deserialize, Serialize};

/// Ответ GET /dashboard/products-count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsCount {
    pub total_products: usize,
}

/// Ответ GET /dashboard/categories-count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesCount {
    pub total_categories: usize,
}

/// Ответ GET /dashboard/recent-products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentProducts {
    pub products: Vec<Product>,
}

/// Агрегированное состояние дашборда, собираемое на фронте из трёх ответов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub recent_products: Vec<Product>,
}
