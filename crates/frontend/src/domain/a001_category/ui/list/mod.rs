mod state;

use contracts::domain::a001_category::{Category, CategoryCreate, CategoryUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api;
use crate::shared::components::data_table::{
    to_table_row, CellAlign, DataTable, RowAction, TableColumn, TableMode, TableRowData,
    ToggleColumn,
};
use crate::shared::components::search_bar::SearchBar;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal};
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

/// Список категорий меню.
///
/// Коллекция небольшая, грузится целиком — таблица работает в клиентском
/// режиме и режет страницы сама.
#[component]
pub fn CategoryListPage() -> impl IntoView {
    let state = create_state();
    let all_categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let pending_delete: RwSignal<Option<(Uuid, String)>> = RwSignal::new(None);
    let creating: RwSignal<bool> = RwSignal::new(false);
    let new_name: RwSignal<String> = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(data) => {
                    all_categories.set(data);
                    state.update(|s| s.is_loaded = true);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("fetch_categories: {e}");
                    set_error.set(Some(format!("Не удалось загрузить категории: {}", e)));
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

    let rows = Signal::derive(move || {
        let query = state.with(|s| s.q.to_lowercase());
        all_categories
            .get()
            .iter()
            .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
            .map(to_table_row)
            .collect::<Vec<_>>()
    });

    let columns = vec![
        TableColumn::new("name", "Название"),
        TableColumn::new("is_active", "Статус").align(CellAlign::Center).render(
            |value, _row| {
                if value.as_bool().unwrap_or(false) {
                    "✓ Активна".to_string()
                } else {
                    "✗ Скрыта".to_string()
                }
            },
        ),
        TableColumn::new("created_at", "Создана")
            .width("150px")
            .render(|value, _row| value.as_str().map(format_datetime).unwrap_or_default()),
    ];

    let toggle = ToggleColumn::new("is_active", "Активна", move |row, enabled| {
        let Some(id) = row_id(&row) else { return };
        let body = CategoryUpdate {
            name: row_name(&row),
            is_active: enabled,
        };
        spawn_local(async move {
            match api::update_category(id, &body).await {
                Ok(_) => load_data(),
                Err(e) => {
                    log::error!("update_category: {e}");
                    set_error.set(Some(format!("Не удалось обновить категорию: {}", e)));
                }
            }
        });
    });

    let actions = vec![RowAction::danger("Удалить", move |row| {
        if let Some(id) = row_id(&row) {
            pending_delete.set(Some((id, row_name(&row))));
        }
    })
    .icon("trash")];

    let confirm_delete = Callback::new(move |_: ()| {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("delete_category: {e}");
                    set_error.set(Some(format!("Не удалось удалить категорию: {}", e)));
                }
            }
        });
    });

    let save_new = Callback::new(move |_: ()| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        creating.set(false);
        new_name.set(String::new());
        let body = CategoryCreate {
            name,
            is_active: true,
        };
        spawn_local(async move {
            match api::create_category(&body).await {
                Ok(_) => load_data(),
                Err(e) => {
                    log::error!("create_category: {e}");
                    set_error.set(Some(format!("Не удалось создать категорию: {}", e)));
                }
            }
        });
    });

    let search_value = Signal::derive(move || state.with(|s| s.q.clone()));
    let apply_search = Callback::new(move |q: String| {
        state.update(|s| s.q = q);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Категории"</h1>
                    <Badge>{move || all_categories.get().len().to_string()}</Badge>
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
                        placeholder="Название категории..."
                    />
                </div>

                <DataTable
                    rows=rows
                    columns=columns
                    mode=TableMode::Client { page_size: 10 }
                    toggle=toggle
                    actions=actions
                    loading=loading
                    empty_message="Категорий пока нет"
                    page_size_options=vec![10, 25, 50]
                />

                {move || {
                    creating
                        .get()
                        .then(|| {
                            view! {
                                <Modal
                                    title="Новая категория".to_string()
                                    on_close=Callback::new(move |_: ()| creating.set(false))
                                >
                                    <div class="form">
                                        <label class="form__field">
                                            <span class="form__label">"Название"</span>
                                            <input
                                                type="text"
                                                prop:value=move || new_name.get()
                                                on:input=move |ev| new_name.set(event_target_value(&ev))
                                            />
                                        </label>
                                    </div>
                                    <div class="form__buttons">
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| save_new.run(())
                                        >
                                            "Создать"
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| creating.set(false)
                                        >
                                            "Отмена"
                                        </Button>
                                    </div>
                                </Modal>
                            }
                        })
                }}

                {move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| {
                            view! {
                                <ConfirmDialog
                                    title="Удаление категории".to_string()
                                    message=format!("Удалить категорию «{}»? Блюда останутся без категории.", name)
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
