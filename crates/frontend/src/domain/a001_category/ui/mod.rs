pub mod list;

pub use list::CategoryListPage;
