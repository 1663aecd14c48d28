//! Типы контракта таблицы: колонки, действия, строка как opaque JSON-объект.

use serde_json::Value;
use std::sync::Arc;

/// Строка таблицы: плоский JSON-объект. Таблица читает значения по ключам
/// колонок и никогда не мутирует строку.
pub type TableRowData = serde_json::Map<String, Value>;

/// Кастомный рендер значения ячейки. Полностью заменяет стандартную
/// стрингификацию для своей колонки.
pub type CellRender = Arc<dyn Fn(&Value, &TableRowData) -> String + Send + Sync>;

/// Обработчик действия строки, вызывается синхронно по клику.
pub type ActionHandler = Arc<dyn Fn(TableRowData) + Send + Sync>;

/// Обработчик переключателя строки: строка + новое значение флага.
/// Сама таблица флаг в строке не меняет — персистентность на владельце.
pub type ToggleHandler = Arc<dyn Fn(TableRowData, bool) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl CellAlign {
    pub fn css(&self) -> &'static str {
        match self {
            CellAlign::Left => "left",
            CellAlign::Center => "center",
            CellAlign::Right => "right",
        }
    }
}

/// Описание колонки таблицы
#[derive(Clone)]
pub struct TableColumn {
    /// Ключ свойства строки
    pub key: String,
    /// Заголовок колонки
    pub label: String,
    /// CSS-ширина, например "120px" или "20%"
    pub width: Option<String>,
    pub align: CellAlign,
    pub render: Option<CellRender>,
}

impl TableColumn {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width: None,
            align: CellAlign::default(),
            render: None,
        }
    }

    pub fn width(mut self, width: &str) -> Self {
        self.width = Some(width.to_string());
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(&Value, &TableRowData) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Danger,
}

/// Действие в меню строки (⋮)
#[derive(Clone)]
pub struct RowAction {
    pub label: String,
    pub icon: Option<&'static str>,
    pub variant: ActionVariant,
    pub on_select: ActionHandler,
}

impl RowAction {
    pub fn new(label: &str, on_select: impl Fn(TableRowData) + Send + Sync + 'static) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            variant: ActionVariant::Default,
            on_select: Arc::new(on_select),
        }
    }

    pub fn danger(label: &str, on_select: impl Fn(TableRowData) + Send + Sync + 'static) -> Self {
        Self {
            variant: ActionVariant::Danger,
            ..Self::new(label, on_select)
        }
    }

    pub fn icon(mut self, name: &'static str) -> Self {
        self.icon = Some(name);
        self
    }
}

/// Колонка-переключатель (например, доступность блюда)
#[derive(Clone)]
pub struct ToggleColumn {
    /// Ключ булевого свойства строки
    pub key: String,
    pub label: String,
    pub on_toggle: ToggleHandler,
}

impl ToggleColumn {
    pub fn new(
        key: &str,
        label: &str,
        on_toggle: impl Fn(TableRowData, bool) + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            on_toggle: Arc::new(on_toggle),
        }
    }
}

/// Значение ячейки для отображения.
///
/// Кастомный рендер имеет приоритет; без него значение стрингифицируется,
/// отсутствующий ключ и null деградируют до пустой строки, не ошибки.
pub fn get_cell_value(row: &TableRowData, column: &TableColumn) -> String {
    let value = row.get(&column.key).cloned().unwrap_or(Value::Null);

    if let Some(render) = &column.render {
        return render(&value, row);
    }

    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Сериализует доменный объект в строку таблицы.
///
/// Не-объекты схлопываются в пустую строку: таблица отобразит пустые ячейки
/// вместо паники.
pub fn to_table_row<T: serde::Serialize>(item: &T) -> TableRowData {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => map,
        _ => TableRowData::new(),
    }
}

/// Вызывает обработчик действия и закрывает открытое меню строки.
pub fn dispatch_action(action: &RowAction, row: &TableRowData, open_menu: &mut Option<usize>) {
    (action.on_select)(row.clone());
    *open_menu = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn row(value: Value) -> TableRowData {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn test_cell_value_plain() {
        let row = row(json!({"name": "Капучино", "price": 99.9, "is_available": true}));
        assert_eq!(get_cell_value(&row, &TableColumn::new("name", "")), "Капучино");
        assert_eq!(get_cell_value(&row, &TableColumn::new("price", "")), "99.9");
        assert_eq!(get_cell_value(&row, &TableColumn::new("is_available", "")), "true");
    }

    #[test]
    fn test_cell_value_render_overrides() {
        let row = row(json!({"price": 99.9}));
        let column = TableColumn::new("price", "Цена")
            .render(|value, _row| format!("${:.2}", value.as_f64().unwrap_or(0.0)));
        assert_eq!(get_cell_value(&row, &column), "$99.90");
    }

    #[test]
    fn test_cell_value_missing_key_is_empty() {
        let row = row(json!({"name": "Капучино"}));
        assert_eq!(get_cell_value(&row, &TableColumn::new("absent", "")), "");
    }

    #[test]
    fn test_cell_value_null_is_empty() {
        let row = row(json!({"description": null}));
        assert_eq!(get_cell_value(&row, &TableColumn::new("description", "")), "");
    }

    #[test]
    fn test_dispatch_action_runs_handler_and_closes_menu() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_handler = calls.clone();
        let action = RowAction::new("Удалить", move |row| {
            assert_eq!(row.get("id").and_then(|v| v.as_str()), Some("p-1"));
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
        });

        let row = row(json!({"id": "p-1"}));
        let mut open_menu = Some(3);
        dispatch_action(&action, &row, &mut open_menu);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(open_menu, None);
    }
}
