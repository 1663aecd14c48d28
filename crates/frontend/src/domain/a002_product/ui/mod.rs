pub mod list;

pub use list::ProductListPage;
