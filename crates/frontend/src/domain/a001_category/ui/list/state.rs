use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CategoryListState {
    // filter
    pub q: String,

    // load flag
    pub is_loaded: bool,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}
