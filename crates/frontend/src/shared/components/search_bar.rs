//! Строка поиска с debounce и кнопкой очистки.

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Минимальная длина запроса; короче — фильтр считается сброшенным.
pub const MIN_QUERY_LEN: usize = 4;

const DEBOUNCE_MS: i32 = 300;

/// Нормализует сырой ввод в значение фильтра: обрезает пробелы, запросы
/// короче [`MIN_QUERY_LEN`] схлопывает в пустую строку.
pub fn normalize_query(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() >= MIN_QUERY_LEN {
        trimmed.to_string()
    } else {
        String::new()
    }
}

#[component]
pub fn SearchBar(
    /// Текущее применённое значение фильтра (для подсветки активности)
    #[prop(into)]
    value: Signal<String>,
    /// Callback с нормализованным запросом
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск (мин. 4 символа)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input'а (до debounce)
    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_search.run(normalize_query(&new_value));
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="search-bar" style="position: relative; display: inline-flex; align-items: center;">
            <span class="search-bar__icon">{icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                            on:click=clear_filter
                            title="Очистить"
                        >
                            {icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_short_input_resets() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("суп"), "");
        assert_eq!(normalize_query("  ab "), "");
    }

    #[test]
    fn test_normalize_query_trims() {
        assert_eq!(normalize_query("  борщ  "), "борщ");
        assert_eq!(normalize_query("latte"), "latte");
    }
}
