use super::paging::{resolve_page_intent, PageIntent};
use super::types::{
    dispatch_action, get_cell_value, ActionVariant, RowAction, TableColumn, TableRowData,
    ToggleColumn,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::shared::pagination::PaginationMeta;
use leptos::prelude::*;
use thaw::*;

/// Режим пагинации таблицы.
#[derive(Clone)]
pub enum TableMode {
    /// Таблица владеет курсором страницы и режет полный список сама.
    Client { page_size: usize },
    /// Строки уже являются текущей страницей; метаданным владельца таблица
    /// доверяет как есть и смену страницы лишь запрашивает callback'ом.
    Server {
        meta: Signal<PaginationMeta>,
        on_page_change: Callback<usize>,
    },
}

fn row_key(index: usize, row: &TableRowData) -> String {
    row.get("id")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| index.to_string())
}

/// Универсальная таблица списковых страниц.
///
/// Колонки и действия задаются владельцем; строки — opaque JSON-объекты,
/// таблица их не мутирует. Внутреннее состояние ограничено курсором страницы
/// (клиентский режим) и индексом открытого меню действий.
#[component]
pub fn DataTable(
    /// Строки. В серверном режиме — уже текущая страница.
    #[prop(into)]
    rows: Signal<Vec<TableRowData>>,
    columns: Vec<TableColumn>,
    mode: TableMode,
    #[prop(optional, into)]
    on_row_click: Option<Callback<TableRowData>>,
    /// Колонка-переключатель (например, "в наличии")
    #[prop(optional)]
    toggle: Option<ToggleColumn>,
    /// Действия меню строки
    #[prop(optional)]
    actions: Vec<RowAction>,
    #[prop(optional, into)]
    loading: Option<Signal<bool>>,
    #[prop(optional, into)]
    empty_message: Option<String>,
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let loading = loading.unwrap_or_else(|| Signal::derive(|| false));
    let empty_message =
        StoredValue::new(empty_message.unwrap_or_else(|| "Нет данных".to_string()));

    let is_client = matches!(mode, TableMode::Client { .. });
    let current_page = RwSignal::new(1usize);
    let page_size = RwSignal::new(match &mode {
        TableMode::Client { page_size } => (*page_size).max(1),
        TableMode::Server { .. } => 1,
    });
    let open_menu: RwSignal<Option<usize>> = RwSignal::new(None);

    let mode_for_meta = mode.clone();
    let meta = Signal::derive(move || match &mode_for_meta {
        TableMode::Client { .. } => {
            PaginationMeta::from_totals(rows.get().len(), page_size.get(), current_page.get())
        }
        TableMode::Server { meta, .. } => meta.get(),
    });

    let page_rows = Signal::derive(move || {
        if is_client {
            let m = meta.get();
            let start = (m.current_page - 1) * m.limit;
            rows.get()
                .into_iter()
                .skip(start)
                .take(m.limit)
                .collect::<Vec<_>>()
        } else {
            rows.get()
        }
    });

    let mode_for_nav = mode.clone();
    let request_page = Callback::new(move |intent: PageIntent| {
        let m = meta.get_untracked();
        // невалидные цели (клик по многоточию, выход за диапазон) молча
        // игнорируются — это не ошибка
        if let Some(target) = resolve_page_intent(&m, intent) {
            match &mode_for_nav {
                TableMode::Client { .. } => current_page.set(target),
                TableMode::Server { on_page_change, .. } => on_page_change.run(target),
            }
        }
        open_menu.set(None);
    });

    // размер страницы меняется только в клиентском режиме; в серверном он
    // принадлежит метаданным владельца
    let on_page_size_change = is_client.then(|| {
        Callback::new(move |size: usize| {
            page_size.set(size.max(1));
            current_page.set(1);
        })
    });

    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let toggle = StoredValue::new(toggle);
    let has_actions = actions.with_value(|a| !a.is_empty());
    let has_toggle = toggle.with_value(|t| t.is_some());
    let col_count =
        columns.with_value(|c| c.len()) + usize::from(has_toggle) + usize::from(has_actions);

    view! {
        <div class="data-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|col| {
                                    let label = col.label.clone();
                                    let style = match &col.width {
                                        Some(width) => format!(
                                            "width: {}; text-align: {};",
                                            width,
                                            col.align.css()
                                        ),
                                        None => format!("text-align: {};", col.align.css()),
                                    };
                                    view! {
                                        <TableHeaderCell attr:style=style>{label}</TableHeaderCell>
                                    }
                                })
                                .collect_view()
                        })}
                        {has_toggle.then(|| {
                            let label = toggle
                                .with_value(|t| t.as_ref().map(|t| t.label.clone()))
                                .unwrap_or_default();
                            view! { <TableHeaderCell>{label}</TableHeaderCell> }
                        })}
                        {has_actions.then(|| {
                            view! { <TableHeaderCell attr:style="width: 48px;">""</TableHeaderCell> }
                        })}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                        if loading.get() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan=col_count.to_string()>
                                        <TableCellLayout>"Загрузка..."</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                                .into_any()
                        } else if page_rows.get().is_empty() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan=col_count.to_string()>
                                        <TableCellLayout>{empty_message.get_value()}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                                .into_any()
                        } else {
                            view! {
                                <For
                                    each=move || {
                                        page_rows.get().into_iter().enumerate().collect::<Vec<_>>()
                                    }
                                    key=|(index, row)| row_key(*index, row)
                                    children=move |(index, row): (usize, TableRowData)| {
                                        let row_for_click = row.clone();
                                        let cells = columns
                                            .with_value(|cols| {
                                                cols.iter()
                                                    .map(|col| {
                                                        let text = get_cell_value(&row, col);
                                                        let style = format!(
                                                            "text-align: {};",
                                                            col.align.css()
                                                        );
                                                        view! {
                                                            <TableCell attr:style=style>
                                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()
                                            });
                                        let toggle_cell = toggle
                                            .with_value(|t| {
                                                t.as_ref()
                                                    .map(|t| {
                                                        let enabled = row
                                                            .get(&t.key)
                                                            .and_then(|v| v.as_bool())
                                                            .unwrap_or(false);
                                                        let handler = t.on_toggle.clone();
                                                        let row_for_toggle = row.clone();
                                                        view! {
                                                            <TableCell>
                                                                <input
                                                                    type="checkbox"
                                                                    class="table__toggle"
                                                                    prop:checked=enabled
                                                                    on:click=move |ev| ev.stop_propagation()
                                                                    on:change=move |ev| {
                                                                        let checked = event_target_checked(&ev);
                                                                        handler(row_for_toggle.clone(), checked);
                                                                    }
                                                                />
                                                            </TableCell>
                                                        }
                                                    })
                                            });
                                        let actions_cell = has_actions
                                            .then(|| {
                                                let row_for_menu = row.clone();
                                                view! {
                                                    <TableCell>
                                                        <div class="table__actions">
                                                            <button
                                                                class="button button--icon"
                                                                title="Действия"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    open_menu
                                                                        .update(|menu| {
                                                                            *menu = if *menu == Some(index) {
                                                                                None
                                                                            } else {
                                                                                Some(index)
                                                                            };
                                                                        });
                                                                }
                                                            >
                                                                {icon("more-vertical")}
                                                            </button>
                                                            {move || {
                                                                (open_menu.get() == Some(index))
                                                                    .then(|| {
                                                                        let row = row_for_menu.clone();
                                                                        view! {
                                                                            <div class="table__menu">
                                                                                {actions
                                                                                    .with_value(|list| {
                                                                                        list.iter()
                                                                                            .map(|action| {
                                                                                                let label = action.label.clone();
                                                                                                let icon_name = action.icon;
                                                                                                let class = match action.variant {
                                                                                                    ActionVariant::Danger => {
                                                                                                        "table__menu-item table__menu-item--danger"
                                                                                                    }
                                                                                                    ActionVariant::Default => "table__menu-item",
                                                                                                };
                                                                                                let action = action.clone();
                                                                                                let row = row.clone();
                                                                                                view! {
                                                                                                    <button
                                                                                                        class=class
                                                                                                        on:click=move |ev| {
                                                                                                            ev.stop_propagation();
                                                                                                            open_menu
                                                                                                                .update(|menu| dispatch_action(&action, &row, menu));
                                                                                                        }
                                                                                                    >
                                                                                                        {icon_name.map(icon)}
                                                                                                        <span>{label}</span>
                                                                                                    </button>
                                                                                                }
                                                                                            })
                                                                                            .collect_view()
                                                                                    })}
                                                                            </div>
                                                                        }
                                                                    })
                                                            }}
                                                        </div>
                                                    </TableCell>
                                                }
                                            });
                                        view! {
                                            <TableRow on:click=move |_| {
                                                if let Some(callback) = on_row_click {
                                                    callback.run(row_for_click.clone());
                                                }
                                            }>
                                                {cells}
                                                {toggle_cell}
                                                {actions_cell}
                                            </TableRow>
                                        }
                                    }
                                />
                            }
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                meta=meta
                rows_on_page=Signal::derive(move || page_rows.get().len())
                on_intent=request_page
                on_page_size_change=on_page_size_change
                page_size_options=page_size_options
            />
        </div>
    }
}
