use crate::shared::metadata::TableSchema;
use crate::shared::table::{Row, RowId};
use std::fmt;

/// Замечание нормализации: в исходной записи нет обязательного поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeWarning {
    pub entity: &'static str,
    pub id: String,
    pub field: &'static str,
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}': missing required field '{}'",
            self.entity, self.id, self.field
        )
    }
}

/// Трейт для записей API, которые показываются в таблице
///
/// Нормализация никогда не падает: отсутствующие поля становятся `Null`,
/// а обязательные дополнительно попадают в список замечаний.
pub trait TableEntity {
    /// Индекс сущности в системе (например, "a001")
    fn entity_index() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Схема таблицы списка
    fn schema() -> TableSchema;

    /// Плоская строка таблицы и замечания
    fn to_row(&self) -> (Row, Vec<NormalizeWarning>);
}

/// Нормализует весь ответ API. Замечания пишутся в лог,
/// строкам без `_id` выдаётся временный идентификатор по позиции.
pub fn normalize_all<T: TableEntity>(records: &[T]) -> Vec<Row> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (mut row, warnings) = record.to_row();
            for warning in &warnings {
                log::warn!("{}", warning);
            }
            if row.id.is_empty() {
                row.id = RowId::new(format!("#{}", index));
            }
            row
        })
        .collect()
}

/// Проверка обязательного строкового поля
pub(crate) fn require(
    warnings: &mut Vec<NormalizeWarning>,
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: Option<&str>,
) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        warnings.push(NormalizeWarning {
            entity,
            id: id.to_string(),
            field,
        });
    }
}
