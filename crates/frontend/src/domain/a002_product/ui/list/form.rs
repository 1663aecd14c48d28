use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::modal::Modal;

/// Значения формы блюда; в DTO их собирает владелец страницы.
#[derive(Clone, Debug, Default)]
pub struct ProductFormData {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}

/// Форма создания/редактирования блюда в модальном окне.
#[component]
pub fn ProductFormModal(
    title: String,
    /// Исходные значения при редактировании; None — создание
    #[prop(optional)]
    initial: Option<Product>,
    on_save: Callback<ProductFormData>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        initial
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let price = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default(),
    );
    let is_available = RwSignal::new(initial.as_ref().map(|p| p.is_available).unwrap_or(true));

    let submit = move |_| {
        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            return;
        }
        let description_value = description.get_untracked().trim().to_string();
        on_save.run(ProductFormData {
            name: name_value,
            description: (!description_value.is_empty()).then_some(description_value),
            price: price.get_untracked().trim().parse().unwrap_or(0.0),
            is_available: is_available.get_untracked(),
        });
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <div class="form">
                <label class="form__field">
                    <span class="form__label">"Название"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Описание"</span>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Цена"</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field form__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || is_available.get()
                        on:change=move |ev| is_available.set(event_target_checked(&ev))
                    />
                    <span>"В наличии"</span>
                </label>
            </div>
            <div class="form__buttons">
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Сохранить"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
            </div>
        </Modal>
    }
}
