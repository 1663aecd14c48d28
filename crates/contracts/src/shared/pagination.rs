//! Метаданные постраничной выборки и конверт ответа списковых endpoint'ов.
//!
//! Два режима использования:
//! - серверный: backend присылает `PaginationMeta` целиком, frontend
//!   отображает его как есть и не пересчитывает;
//! - клиентский: таблица сама строит метаданные из полного списка через
//!   [`PaginationMeta::from_totals`].

use serde::{Deserialize, Serialize};

/// Метаданные пагинации спискового ответа.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Размер страницы, всегда > 0
    pub limit: usize,
    /// Текущая страница (1-based)
    pub current_page: usize,
    /// Всего страниц, всегда >= 1
    pub total_pages: usize,
    /// Всего записей
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Строит согласованные метаданные из полного количества записей.
    ///
    /// `total_pages = ceil(total_items / limit)`, но не меньше 1 — пустой
    /// список отображается как одна пустая страница. `current_page`
    /// зажимается в `[1, total_pages]`.
    pub fn from_totals(total_items: usize, limit: usize, current_page: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = if total_items == 0 {
            1
        } else {
            (total_items + limit - 1) / limit
        };
        let current_page = current_page.clamp(1, total_pages);
        Self {
            limit,
            current_page,
            total_pages,
            total_items,
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
        }
    }

    /// Метаданные для непагинированной коллекции (одна страница).
    pub fn single_page(total_items: usize) -> Self {
        Self::from_totals(total_items, total_items.max(1), 1)
    }
}

/// Конверт спискового ответа: данные текущей страницы плюс метаданные.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals_basic() {
        let meta = PaginationMeta::from_totals(25, 10, 2);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.current_page, 2);
        assert!(meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_from_totals_exact_division() {
        let meta = PaginationMeta::from_totals(30, 10, 3);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_from_totals_empty() {
        let meta = PaginationMeta::from_totals(0, 10, 1);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.current_page, 1);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_from_totals_clamps_page() {
        let meta = PaginationMeta::from_totals(25, 10, 99);
        assert_eq!(meta.current_page, 3);
        assert!(!meta.has_next);

        let meta = PaginationMeta::from_totals(25, 10, 0);
        assert_eq!(meta.current_page, 1);
    }

    #[test]
    fn test_flags_consistent() {
        for total_items in [0usize, 1, 9, 10, 11, 95] {
            for page in 1..=12usize {
                let meta = PaginationMeta::from_totals(total_items, 10, page);
                assert_eq!(meta.has_next, meta.current_page < meta.total_pages);
                assert_eq!(meta.has_prev, meta.current_page > 1);
                assert!(meta.total_pages >= 1);
            }
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let meta = PaginationMeta::from_totals(42, 10, 2);
        let json = serde_json::to_string(&meta).unwrap();
        let back: PaginationMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
