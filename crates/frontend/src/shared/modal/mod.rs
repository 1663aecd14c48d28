use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Модальное окно: закрывается по Escape, клику по оверлею и крестику.
#[component]
pub fn Modal(
    /// Заголовок окна
    title: String,
    /// Callback закрытия
    on_close: Callback<()>,
    /// Кнопки нижней панели (Сохранить, Отмена и т.п.)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    // Escape закрывает окно
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Клики внутри окна не должны закрывать его через оверлей
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                {footer
                    .map(|footer| {
                        view! { <div class="modal-footer">{footer()}</div> }
                    })}
            </div>
        </div>
    }
}

/// Диалог подтверждения необратимого действия.
#[component]
pub fn ConfirmDialog(
    title: String,
    /// Текст вопроса
    message: String,
    /// Подпись кнопки подтверждения
    #[prop(optional, into)]
    confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = if confirm_label.is_empty() {
        "Удалить".to_string()
    } else {
        confirm_label
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__buttons">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                >
                    {confirm_label}
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
