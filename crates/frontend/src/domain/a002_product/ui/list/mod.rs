mod form;
mod state;

use contracts::shared::pagination::PaginationMeta;
use contracts::domain::a002_product::{Product, ProductCreate, ProductUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::components::data_table::{
    to_table_row, CellAlign, DataTable, RowAction, TableColumn, TableMode, TableRowData,
    ToggleColumn,
};
use crate::shared::components::search_bar::SearchBar;
use crate::shared::components::table::number_format::format_price;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use form::{ProductFormData, ProductFormModal};
use state::create_state;
use uuid::Uuid;

fn row_id(row: &TableRowData) -> Option<Uuid> {
    row.get("id")
        .and_then(|v| v.as_str())
        .and_then(|s| Uuid::parse_str(s).ok())
}

fn row_name(row: &TableRowData) -> String {
    row.get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Список блюд.
///
/// Каталог большой, поэтому таблица работает в серверном режиме: backend
/// присылает страницу и метаданные, смена страницы — это перезапрос.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let state = create_state();
    let items: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let meta: RwSignal<PaginationMeta> = RwSignal::new(PaginationMeta::from_totals(0, 25, 1));
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let pending_delete: RwSignal<Option<(Uuid, String)>> = RwSignal::new(None);
    let creating: RwSignal<bool> = RwSignal::new(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = move || {
        let (page, page_size, q) = state.with_untracked(|s| (s.page, s.page_size, s.q.clone()));
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products(page, page_size, &q).await {
                Ok(response) => {
                    items.set(response.data);
                    meta.set(response.meta);
                    state.update(|s| s.is_loaded = true);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("fetch_products: {e}");
                    set_error.set(Some(format!("Не удалось загрузить блюда: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let rows = Signal::derive(move || items.get().iter().map(to_table_row).collect::<Vec<_>>());

    let columns = vec![
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

    let toggle = ToggleColumn::new("is_available", "В наличии", move |row, enabled| {
        let Some(id) = row_id(&row) else { return };
        spawn_local(async move {
            match api::set_availability(id, enabled).await {
                Ok(_) => load_data(),
                Err(e) => {
                    log::error!("set_availability: {e}");
                    set_error.set(Some(format!("Не удалось обновить блюдо: {}", e)));
                }
            }
        });
    });

    let actions = vec![
        RowAction::new("Редактировать", move |row| {
            let Some(id) = row_id(&row) else { return };
            let product = items
                .get_untracked()
                .into_iter()
                .find(|p| p.id.value() == id);
            editing.set(product);
        })
        .icon("edit"),
        RowAction::danger("Удалить", move |row| {
            if let Some(id) = row_id(&row) {
                pending_delete.set(Some((id, row_name(&row))));
            }
        })
        .icon("trash"),
    ];

    let save_new = Callback::new(move |data: ProductFormData| {
        creating.set(false);
        let body = ProductCreate {
            category_id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            image_url: None,
            is_available: data.is_available,
        };
        spawn_local(async move {
            match api::create_product(&body).await {
                Ok(_) => load_data(),
                Err(e) => {
                    log::error!("create_product: {e}");
                    set_error.set(Some(format!("Не удалось создать блюдо: {}", e)));
                }
            }
        });
    });

    let save_edit = Callback::new(move |data: ProductFormData| {
        let Some(product) = editing.get_untracked() else {
            return;
        };
        editing.set(None);
        let body = ProductUpdate {
            category_id: product.category_id,
            name: data.name,
            description: data.description,
            price: data.price,
            image_url: product.image_url.clone(),
            is_available: data.is_available,
        };
        spawn_local(async move {
            match api::update_product(product.id.value(), &body).await {
                Ok(_) => load_data(),
                Err(e) => {
                    log::error!("update_product: {e}");
                    set_error.set(Some(format!("Не удалось сохранить блюдо: {}", e)));
                }
            }
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("delete_product: {e}");
                    set_error.set(Some(format!("Не удалось удалить блюдо: {}", e)));
                }
            }
        });
    });

    // Таблица запрашивает страницу — владелец перезагружает данные
    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    });

    let search_value = Signal::derive(move || state.with(|s| s.q.clone()));
    let apply_search = Callback::new(move |q: String| {
        state.update(|s| {
            s.q = q;
            s.page = 1;
        });
        load_data();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Блюда"</h1>
                    <Badge>{move || meta.get().total_items.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| creating.set(true)
                    >
                        {icon("plus")}
                        " Добавить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="page__toolbar">
                    <SearchBar
                        value=search_value
                        on_search=apply_search
                        placeholder="Название блюда..."
                    />
                </div>

                <DataTable
                    rows=rows
                    columns=columns
                    mode=TableMode::Server {
                        meta: meta.into(),
                        on_page_change: go_to_page,
                    }
                    toggle=toggle
                    actions=actions
                    loading=loading
                    empty_message="По запросу ничего не найдено"
                />

                {move || {
                    creating
                        .get()
                        .then(|| {
                            view! {
                                <ProductFormModal
                                    title="Новое блюдо".to_string()
                                    on_save=save_new
                                    on_cancel=Callback::new(move |_: ()| creating.set(false))
                                />
                            }
                        })
                }}

                {move || {
                    editing
                        .get()
                        .map(|product| {
                            view! {
                                <ProductFormModal
                                    title="Редактирование блюда".to_string()
                                    initial=product
                                    on_save=save_edit
                                    on_cancel=Callback::new(move |_: ()| editing.set(None))
                                />
                            }
                        })
                }}

                {move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| {
                            view! {
                                <ConfirmDialog
                                    title="Удаление блюда".to_string()
                                    message=format!("Удалить блюдо «{}»? Действие необратимо.", name)
                                    on_confirm=confirm_delete
                                    on_cancel=Callback::new(move |_: ()| pending_delete.set(None))
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}
