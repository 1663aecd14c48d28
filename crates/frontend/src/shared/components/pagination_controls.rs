use crate::shared::components::data_table::paging::{
    compute_page_window, visible_range, PageIntent, PageItem,
};
use crate::shared::icons::icon;
use contracts::shared::pagination::PaginationMeta;
use leptos::prelude::*;

/// PaginationControls — переиспользуемый пагинатор списков.
///
/// Кнопки навигации задизейблены по `has_prev`/`has_next`, между ними —
/// компактное окно номеров страниц с некликабельными многоточиями.
#[component]
pub fn PaginationControls(
    /// Метаданные пагинации (1-based текущая страница)
    #[prop(into)]
    meta: Signal<PaginationMeta>,

    /// Сколько строк реально отображается на текущей странице
    #[prop(into)]
    rows_on_page: Signal<usize>,

    /// Навигационное намерение (страница ещё не провалидирована)
    on_intent: Callback<PageIntent>,

    /// Смена размера страницы; None — селектор скрыт
    #[prop(optional_no_strip)]
    on_page_size_change: Option<Callback<usize>>,

    /// Доступные размеры страницы (по умолчанию [10, 25, 50, 100])
    #[prop(optional_no_strip)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_intent.run(PageIntent::First)
                disabled=move || !meta.get().has_prev
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_intent.run(PageIntent::Prev)
                disabled=move || !meta.get().has_prev
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>

            <span class="pagination-pages">
                {move || {
                    let m = meta.get();
                    compute_page_window(m.current_page, m.total_pages)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => {
                                let active = page == m.current_page;
                                view! {
                                    <button
                                        class=if active {
                                            "pagination-page pagination-page--active"
                                        } else {
                                            "pagination-page"
                                        }
                                        on:click=move |_| on_intent.run(PageIntent::Exact(page))
                                    >
                                        {page.to_string()}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Gap => {
                                view! { <span class="pagination-gap">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </span>

            <button
                class="pagination-btn"
                on:click=move |_| on_intent.run(PageIntent::Next)
                disabled=move || !meta.get().has_next
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_intent.run(PageIntent::Last)
                disabled=move || !meta.get().has_next
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">
                {move || {
                    let m = meta.get();
                    match visible_range(&m, rows_on_page.get()) {
                        Some((start, end)) => {
                            format!("Показано {}\u{2013}{} из {}", start, end, m.total_items)
                        }
                        None => String::new(),
                    }
                }}
            </span>

            {on_page_size_change
                .map(|callback| {
                    view! {
                        <select
                            class="page-size-select"
                            on:change=move |ev| {
                                let val = event_target_value(&ev).parse().unwrap_or(25);
                                callback.run(val);
                            }
                            prop:value=move || meta.get().limit.to_string()
                        >
                            {page_size_opts
                                .iter()
                                .map(|&size| {
                                    view! {
                                        <option
                                            value=size.to_string()
                                            selected=move || meta.get().limit == size
                                        >
                                            {size.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    }
                })}
        </div>
    }
}
