use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    // filter
    pub q: String,

    // server pagination (1-based)
    pub page: usize,
    pub page_size: usize,

    // load flag
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: 1,
            page_size: 25,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
