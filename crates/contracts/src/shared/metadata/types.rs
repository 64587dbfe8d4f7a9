//! Static table schemas: one parameterized table per entity
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::{FieldKind, FilterWidget};
use crate::shared::table::sort::{SortDirection, SortSpec};

// ============================================================================
// Column-level metadata
// ============================================================================

/// Metadata for a single table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMeta {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub sortable: bool,
    pub filter: FilterWidget,
    pub visible_in_list: bool,
    pub column_width: Option<u32>,
}

impl ColumnMeta {
    pub const fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Text,
            sortable: true,
            filter: FilterWidget::Text,
            visible_in_list: true,
            column_width: None,
        }
    }

    pub const fn number(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Number,
            sortable: true,
            filter: FilterWidget::Range,
            visible_in_list: true,
            column_width: Some(110),
        }
    }

    pub const fn date(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Date,
            sortable: true,
            filter: FilterWidget::DateFrom,
            visible_in_list: true,
            column_width: Some(160),
        }
    }

    pub const fn tags(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::Tags,
            sortable: false,
            filter: FilterWidget::Select,
            visible_in_list: true,
            column_width: None,
        }
    }

    pub const fn with_filter(self, filter: FilterWidget) -> Self {
        Self { filter, ..self }
    }

    pub const fn hidden(self) -> Self {
        Self {
            visible_in_list: false,
            ..self
        }
    }
}

// ============================================================================
// Table-level metadata
// ============================================================================

/// Схема таблицы сущности: колонки, поля поиска и сортировка по умолчанию
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub entity_name: &'static str,
    pub list_name: &'static str,
    pub columns: &'static [ColumnMeta],
    pub searchable: &'static [&'static str],
    pub default_sort: Option<(&'static str, SortDirection)>,
    /// Префикс имени файла при экспорте
    pub export_name: &'static str,
}

impl TableSchema {
    pub fn column(&self, field: &str) -> Option<&'static ColumnMeta> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn list_columns(&self) -> impl Iterator<Item = &'static ColumnMeta> {
        self.columns.iter().filter(|c| c.visible_in_list)
    }

    pub fn default_sort_spec(&self) -> Option<SortSpec> {
        self.default_sort
            .map(|(field, direction)| SortSpec::new(field, direction))
    }

    /// Заголовки колонок для экспорта (все колонки схемы)
    pub fn export_headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }
}
