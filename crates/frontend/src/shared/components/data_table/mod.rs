//! Универсальная таблица с пагинацией для списковых страниц админки.
//!
//! Два режима работы:
//! - [`TableMode::Client`] — таблица сама владеет курсором страницы и режет
//!   полную коллекцию локально;
//! - [`TableMode::Server`] — строки уже являются текущей страницей, смена
//!   страницы лишь запрашивается у владельца через callback.

pub mod paging;
pub mod types;
pub mod widget;

pub use paging::{compute_page_window, resolve_page_intent, visible_range, PageIntent, PageItem};
pub use types::{
    dispatch_action, get_cell_value, to_table_row, ActionVariant, CellAlign, RowAction,
    TableColumn, TableRowData, ToggleColumn,
};
pub use widget::{DataTable, TableMode};
