//! Чистая логика пагинации: окно номеров страниц, разрешение навигационных
//! намерений, границы "Показано X–Y из Z".

use contracts::shared::pagination::PaginationMeta;

/// Элемент пагинатора: номер страницы или многоточие.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Компактное окно номеров страниц с многоточиями.
///
/// До 7 страниц включительно показываются все номера — многоточие ничего бы
/// не сэкономило. Дальше держим сплошной прогон у ближайшей границы, а в
/// середине — текущую страницу ±1 между двумя многоточиями.
pub fn compute_page_window(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut window = Vec::new();
    if total <= 7 {
        window.extend((1..=total).map(PageItem::Page));
    } else if current <= 4 {
        window.extend((1..=5).map(PageItem::Page));
        window.push(PageItem::Gap);
        window.push(PageItem::Page(total));
    } else if current >= total - 3 {
        window.push(PageItem::Page(1));
        window.push(PageItem::Gap);
        window.extend((total - 4..=total).map(PageItem::Page));
    } else {
        window.push(PageItem::Page(1));
        window.push(PageItem::Gap);
        window.extend((current - 1..=current + 1).map(PageItem::Page));
        window.push(PageItem::Gap);
        window.push(PageItem::Page(total));
    }
    window
}

/// Навигационное намерение пагинатора.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    First,
    Prev,
    Next,
    Last,
    Exact(usize),
}

/// Превращает намерение в номер запрашиваемой страницы.
///
/// `None` — молчаливый no-op: Next/Prev за границей диапазона или Exact вне
/// `[1, total_pages]` (клик по слоту многоточия намерения не создаёт вовсе).
pub fn resolve_page_intent(meta: &PaginationMeta, intent: PageIntent) -> Option<usize> {
    match intent {
        PageIntent::First => Some(1),
        PageIntent::Last => Some(meta.total_pages),
        PageIntent::Next => meta.has_next.then(|| meta.current_page + 1),
        PageIntent::Prev => meta.has_prev.then(|| meta.current_page - 1),
        PageIntent::Exact(page) => (page >= 1 && page <= meta.total_pages).then_some(page),
    }
}

/// Границы подписи "Показано X–Y из Z" (1-based, включительно).
///
/// `None` — подпись не показывается: пустая коллекция или пустая страница.
pub fn visible_range(meta: &PaginationMeta, rows_on_page: usize) -> Option<(usize, usize)> {
    if meta.total_items == 0 || rows_on_page == 0 {
        return None;
    }
    let start = (meta.current_page - 1) * meta.limit + 1;
    let end = (start + rows_on_page - 1).min(meta.total_items);
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    fn pages(window: &[PageItem]) -> Vec<usize> {
        window
            .iter()
            .filter_map(|item| match item {
                Page(n) => Some(*n),
                Gap => None,
            })
            .collect()
    }

    #[test]
    fn test_window_small_totals_have_no_gap() {
        for total in 1..=7 {
            for current in 1..=total {
                let window = compute_page_window(current, total);
                let expected: Vec<PageItem> = (1..=total).map(Page).collect();
                assert_eq!(window, expected, "total={total} current={current}");
            }
        }
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            compute_page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
        assert_eq!(
            compute_page_window(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            compute_page_window(10, 10),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            compute_page_window(7, 10),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            compute_page_window(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn test_window_invariants_sweep() {
        for total in 1..=40usize {
            for current in 1..=total {
                let window = compute_page_window(current, total);
                let nums = pages(&window);

                // границы присутствуют ровно по одному разу
                assert_eq!(nums.iter().filter(|&&n| n == 1).count(), 1);
                assert_eq!(nums.iter().filter(|&&n| n == total).count(), 1);
                // текущая страница всегда видима
                assert!(nums.contains(&current), "total={total} current={current}");
                // строгая монотонность номеров
                assert!(nums.windows(2).all(|w| w[0] < w[1]));
                // не более одного многоточия с каждой стороны
                let gaps = window.iter().filter(|i| **i == Gap).count();
                assert!(gaps <= 2);
            }
        }
    }

    #[test]
    fn test_resolve_exact_out_of_range_is_noop() {
        let meta = PaginationMeta::from_totals(100, 10, 5);
        assert_eq!(resolve_page_intent(&meta, PageIntent::Exact(0)), None);
        assert_eq!(resolve_page_intent(&meta, PageIntent::Exact(11)), None);
        assert_eq!(resolve_page_intent(&meta, PageIntent::Exact(10)), Some(10));
        assert_eq!(resolve_page_intent(&meta, PageIntent::Exact(1)), Some(1));
    }

    #[test]
    fn test_resolve_next_gated_on_has_next() {
        let meta = PaginationMeta::from_totals(30, 10, 2);
        assert_eq!(resolve_page_intent(&meta, PageIntent::Next), Some(3));

        let last = PaginationMeta::from_totals(30, 10, 3);
        assert_eq!(resolve_page_intent(&last, PageIntent::Next), None);
    }

    #[test]
    fn test_resolve_prev_gated_on_has_prev() {
        let meta = PaginationMeta::from_totals(30, 10, 2);
        assert_eq!(resolve_page_intent(&meta, PageIntent::Prev), Some(1));

        let first = PaginationMeta::from_totals(30, 10, 1);
        assert_eq!(resolve_page_intent(&first, PageIntent::Prev), None);
    }

    #[test]
    fn test_resolve_first_last_unconditional() {
        let meta = PaginationMeta::from_totals(30, 10, 2);
        assert_eq!(resolve_page_intent(&meta, PageIntent::First), Some(1));
        assert_eq!(resolve_page_intent(&meta, PageIntent::Last), Some(3));
    }

    #[test]
    fn test_visible_range() {
        let meta = PaginationMeta::from_totals(25, 10, 2);
        assert_eq!(visible_range(&meta, 10), Some((11, 20)));

        // последняя неполная страница не выходит за total_items
        let last = PaginationMeta::from_totals(25, 10, 3);
        assert_eq!(visible_range(&last, 5), Some((21, 25)));
    }

    #[test]
    fn test_visible_range_empty() {
        let empty = PaginationMeta::from_totals(0, 10, 1);
        assert_eq!(visible_range(&empty, 0), None);
    }
}
