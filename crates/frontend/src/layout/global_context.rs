use leptos::prelude::*;

/// Раздел админки, отображаемый в центральной области
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppSection {
    #[default]
    Dashboard,
    Products,
    Categories,
}

impl AppSection {
    pub fn title(&self) -> &'static str {
        match self {
            AppSection::Dashboard => "Дашборд",
            AppSection::Products => "Блюда",
            AppSection::Categories => "Категории",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppSection::Dashboard => "dashboard",
            AppSection::Products => "products",
            AppSection::Categories => "categories",
        }
    }
}

/// Глобальный контекст приложения: активный раздел и состояние сайдбара.
///
/// Роутер не используется — переключение разделов живёт в этом signal'е.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_section: RwSignal<AppSection>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(AppSection::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, section: AppSection) {
        self.active_section.set(section);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
