use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_overview::api;
use crate::shared::components::data_table::{
    to_table_row, CellAlign, DataTable, TableColumn, TableMode,
};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::number_format::format_price;
use crate::shared::date_utils::format_datetime;

/// Сводный дашборд: счётчики каталога и последние добавленные блюда.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let products_count: RwSignal<Option<usize>> = RwSignal::new(None);
    let categories_count: RwSignal<Option<usize>> = RwSignal::new(None);
    let recent: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loaded, set_is_loaded) = signal(false);

    let load_data = move || {
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products_count().await {
                Ok(response) => products_count.set(Some(response.total_products)),
                Err(e) => {
                    log::error!("fetch_products_count: {e}");
                    set_error.set(Some(format!("Не удалось загрузить статистику: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match api::fetch_categories_count().await {
                Ok(response) => categories_count.set(Some(response.total_categories)),
                Err(e) => {
                    log::error!("fetch_categories_count: {e}");
                    set_error.set(Some(format!("Не удалось загрузить статистику: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match api::fetch_recent_products().await {
                Ok(response) => recent.set(response.products),
                Err(e) => {
                    log::error!("fetch_recent_products: {e}");
                    set_error.set(Some(format!("Не удалось загрузить последние блюда: {}", e)));
                }
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_data();
        }
    });

    let recent_rows =
        Signal::derive(move || recent.get().iter().map(to_table_row).collect::<Vec<_>>());

    let recent_columns = vec![
        TableColumn::new("name", "Блюдо"),
        TableColumn::new("category_name", "Категория").width("180px"),
        TableColumn::new("price", "Цена")
            .width("120px")
            .align(CellAlign::Right)
            .render(|value, _row| format_price(value.as_f64().unwrap_or(0.0))),
        TableColumn::new("created_at", "Добавлено")
            .width("150px")
            .render(|value, _row| value.as_str().map(format_datetime).unwrap_or_default()),
    ];

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Дашборд"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="dashboard__cards">
                    <StatCard
                        label="Блюд в меню".to_string()
                        icon_name="products"
                        value=products_count
                    />
                    <StatCard
                        label="Категорий".to_string()
                        icon_name="categories"
                        value=categories_count
                    />
                </div>

                <h2 class="dashboard__subtitle">"Последние добавленные"</h2>
                <DataTable
                    rows=recent_rows
                    columns=recent_columns
                    mode=TableMode::Client { page_size: 5 }
                    empty_message="Пока пусто"
                />
            </div>
        </div>
    }
}
