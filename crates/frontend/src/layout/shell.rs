use crate::dashboards::d400_overview::ui::DashboardPage;
use crate::domain::a001_category::ui::CategoryListPage;
use crate::domain::a002_product::ui::ProductListPage;
use crate::layout::global_context::{AppGlobalContext, AppSection};
use crate::shared::icons::icon;
use leptos::prelude::*;

const SECTIONS: [AppSection; 3] = [
    AppSection::Dashboard,
    AppSection::Products,
    AppSection::Categories,
];

/// Каркас админки: сайдбар с разделами слева, активная страница в центре.
#[component]
pub fn AdminShell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="shell">
            <aside class=move || {
                if ctx.sidebar_open.get() { "shell__sidebar" } else { "shell__sidebar shell__sidebar--collapsed" }
            }>
                <div class="shell__brand">
                    <span class="shell__brand-title">"Resto Admin"</span>
                    <button
                        class="button button--icon"
                        on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
                        title="Свернуть меню"
                    >
                        {icon("menu")}
                    </button>
                </div>
                <nav class="shell__nav">
                    {SECTIONS
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class=move || {
                                        if ctx.active_section.get() == section {
                                            "shell__nav-item shell__nav-item--active"
                                        } else {
                                            "shell__nav-item"
                                        }
                                    }
                                    on:click=move |_| ctx.activate(section)
                                >
                                    {icon(section.icon_name())}
                                    <span class="shell__nav-label">{section.title()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <main class="shell__content">
                {move || match ctx.active_section.get() {
                    AppSection::Dashboard => view! { <DashboardPage /> }.into_any(),
                    AppSection::Products => view! { <ProductListPage /> }.into_any(),
                    AppSection::Categories => view! { <CategoryListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
