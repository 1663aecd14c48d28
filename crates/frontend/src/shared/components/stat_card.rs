use crate::shared::components::table::number_format::format_number_int;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя на дашборде.
#[component]
pub fn StatCard(
    /// Подпись показателя
    label: String,
    /// Имя иконки из icon()
    icon_name: &'static str,
    /// Значение; None — ещё грузится
    #[prop(into)]
    value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || match value.get() {
                        Some(v) => format_number_int(v as f64),
                        None => "\u{2014}".to_string(),
                    }}
                </span>
            </div>
        </div>
    }
}
