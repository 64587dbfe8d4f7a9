//! Состояние одной таблицы (списка): данные, фильтры, сортировка, поиск,
//! окно пагинации и выбор строк.
//!
//! Каждый список создаёт собственный `TableState` и держит его в сигнале;
//! при уходе со страницы состояние уничтожается вместе с владельцем.

use super::export::{build_csv, rows_for_export};
use super::filter::{FilterSet, FilterValue};
use super::pagination::{paginate, Page, PageWindow};
use super::pipeline::apply;
use super::row::{Row, RowId};
use super::selection::{BulkOutcome, SelectionSet};
use super::sort::{toggle_sort, SortSpec};
use crate::shared::error::AdminError;
use crate::shared::metadata::TableSchema;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TableState {
    pub schema: TableSchema,
    rows: Vec<Row>,
    pub filters: FilterSet,
    pub sort: Option<SortSpec>,
    pub search: String,
    pub window: PageWindow,
    pub selection: SelectionSet,
    /// Загружены ли данные хотя бы один раз
    pub is_loaded: bool,
}

impl TableState {
    pub fn new(schema: TableSchema, page_size: usize) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            filters: FilterSet::new(),
            sort: schema.default_sort_spec(),
            search: String::new(),
            window: PageWindow::new(page_size),
            selection: SelectionSet::new(),
            is_loaded: false,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Заменяет данные целиком. Повторные идентификаторы отбрасываются
    /// (остаётся первое вхождение), выбор сужается до новых идентификаторов.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let mut seen: HashSet<RowId> = HashSet::with_capacity(rows.len());
        let mut unique = Vec::with_capacity(rows.len());
        for row in rows {
            if seen.insert(row.id.clone()) {
                unique.push(row);
            } else {
                log::warn!(
                    "{}: duplicate row id '{}' dropped",
                    self.schema.entity_name,
                    row.id
                );
            }
        }
        self.rows = unique;
        self.is_loaded = true;

        let pruned = self.selection.prune(self.rows.iter().map(|r| &r.id));
        if pruned > 0 {
            log::debug!(
                "{}: {} stale ids removed from selection",
                self.schema.entity_name,
                pruned
            );
        }

        let total = self.filtered().len();
        self.window.clamp(total);
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.window.reset();
    }

    pub fn set_filter(&mut self, field: &str, value: FilterValue) {
        self.filters.set(field, value);
        self.window.reset();
    }

    pub fn remove_filter(&mut self, field: &str) {
        self.filters.remove(field);
        self.window.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.window.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.window.set_page_size(page_size);
    }

    /// Клик по заголовку колонки. Несортируемые колонки игнорируются.
    pub fn toggle_sort(&mut self, field: &str) {
        let sortable = self
            .schema
            .column(field)
            .map(|c| c.sortable)
            .unwrap_or(false);
        if !sortable {
            return;
        }
        self.sort = Some(toggle_sort(self.sort.as_ref(), field));
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    pub fn next_page(&mut self) {
        let total = self.filtered().len();
        self.window.next(total);
    }

    pub fn prev_page(&mut self) {
        self.window.prev();
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        let total = self.filtered().len();
        self.window.go_to(page_index, total);
    }

    /// Отфильтрованные и отсортированные строки (все страницы)
    pub fn filtered(&self) -> Vec<Row> {
        apply(
            &self.rows,
            &self.filters,
            self.sort.as_ref(),
            &self.search,
            self.schema.searchable,
        )
    }

    /// Текущая видимая страница
    pub fn visible(&self) -> Page<Row> {
        paginate(
            &self.filtered(),
            self.window.page_size,
            self.window.page_index,
        )
    }

    pub fn toggle_select(&mut self, id: RowId) {
        self.selection.toggle(id);
    }

    pub fn set_selected(&mut self, id: RowId, checked: bool) {
        self.selection.set_checked(id, checked);
    }

    /// Чекбокс в заголовке таблицы
    pub fn toggle_all_on_page(&mut self) {
        let page = self.visible();
        self.selection.toggle_all(page.rows.iter().map(|r| &r.id));
    }

    /// Состояние чекбокса в заголовке: выбрана ли ровно текущая страница
    pub fn page_fully_selected(&self) -> bool {
        let page = self.visible();
        self.selection
            .equals_visible(page.rows.iter().map(|r| &r.id))
    }

    /// После групповой операции: удалённые строки убираются из данных,
    /// в выборе остаются только неудавшиеся
    pub fn apply_bulk_outcome(&mut self, outcome: &BulkOutcome) {
        let removed: HashSet<&RowId> = outcome.succeeded.iter().collect();
        self.rows.retain(|row| !removed.contains(&row.id));
        self.selection.retain_failed(outcome);
        let total = self.filtered().len();
        self.window.clamp(total);
    }

    /// Строки для выгрузки: выбранные или все отфильтрованные
    pub fn export_rows(&self) -> Vec<Row> {
        rows_for_export(&self.filtered(), &self.selection)
    }

    pub fn export_csv(&self) -> Result<String, AdminError> {
        build_csv(&self.schema, &self.export_rows()).map_err(AdminError::Export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::ColumnMeta;
    use crate::shared::table::row::FieldValue;
    use crate::shared::table::sort::SortDirection;

    const COLUMNS: &[ColumnMeta] = &[
        ColumnMeta::text("name", "Название"),
        ColumnMeta::text("status", "Статус"),
        ColumnMeta::number("price", "Цена"),
        ColumnMeta::tags("tags", "Теги"),
    ];

    const SCHEMA: TableSchema = TableSchema {
        entity_name: "test",
        list_name: "Тест",
        columns: COLUMNS,
        searchable: &["name"],
        default_sort: Some(("name", SortDirection::Ascending)),
        export_name: "test",
    };

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| {
                Row::new(format!("{:02}", i))
                    .with("name", FieldValue::text(format!("item {:02}", i)))
                    .with(
                        "status",
                        FieldValue::text(if i % 2 == 0 { "active" } else { "draft" }),
                    )
                    .with("price", FieldValue::Number(i as f64))
            })
            .collect()
    }

    fn loaded(count: usize) -> TableState {
        let mut state = TableState::new(SCHEMA, 10);
        state.set_rows(rows(count));
        state
    }

    #[test]
    fn test_default_sort_from_schema() {
        let state = TableState::new(SCHEMA, 10);
        assert_eq!(state.sort, Some(SortSpec::ascending("name")));
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut state = TableState::new(SCHEMA, 10);
        state.set_rows(vec![
            Row::new("1").with("name", FieldValue::text("first")),
            Row::new("1").with("name", FieldValue::text("second")),
            Row::new("2").with("name", FieldValue::text("other")),
        ]);
        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.rows()[0].display("name"), "first");
    }

    #[test]
    fn test_search_filter_and_page_size_reset_page() {
        let mut state = loaded(25);
        state.go_to_page(3);
        assert_eq!(state.window.page_index, 3);
        state.set_search("item");
        assert_eq!(state.window.page_index, 1);

        state.go_to_page(2);
        state.set_filter("status", FilterValue::Exact("active".into()));
        assert_eq!(state.window.page_index, 1);

        state.go_to_page(2);
        state.set_page_size(20);
        assert_eq!(state.window.page_index, 1);

        state.go_to_page(2);
        state.clear_filters();
        assert_eq!(state.window.page_index, 1);
    }

    #[test]
    fn test_visible_page_and_navigation() {
        let mut state = loaded(25);
        state.next_page();
        state.next_page();
        state.next_page();
        let page = state.visible();
        assert_eq!(page.page_index, 3);
        assert_eq!(page.rows.len(), 5);
        assert!(!page.has_next);
        state.prev_page();
        assert_eq!(state.visible().page_index, 2);
    }

    #[test]
    fn test_toggle_sort_ignores_unsortable_columns() {
        let mut state = loaded(3);
        state.toggle_sort("tags");
        assert_eq!(state.sort, Some(SortSpec::ascending("name")));
        state.toggle_sort("name");
        assert_eq!(
            state.sort,
            Some(SortSpec::new("name", SortDirection::Descending))
        );
        state.toggle_sort("price");
        assert_eq!(state.sort, Some(SortSpec::ascending("price")));
    }

    #[test]
    fn test_toggle_all_on_page() {
        let mut state = loaded(15);
        state.toggle_all_on_page();
        assert_eq!(state.selection.len(), 10);
        assert!(state.page_fully_selected());
        state.toggle_all_on_page();
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_refetch_prunes_selection() {
        let mut state = loaded(5);
        state.toggle_select(RowId::from("00"));
        state.toggle_select(RowId::from("04"));
        state.set_rows(rows(3));
        assert_eq!(state.selection.ids(), vec![RowId::from("00")]);
    }

    #[test]
    fn test_bulk_delete_with_one_failure() {
        let mut state = loaded(5);
        for id in ["00", "01", "02"] {
            state.toggle_select(RowId::from(id));
        }
        let mut outcome = BulkOutcome::new();
        outcome.record(RowId::from("00"), Ok(()));
        outcome.record(RowId::from("01"), Err("HTTP 500".into()));
        outcome.record(RowId::from("02"), Ok(()));

        state.apply_bulk_outcome(&outcome);
        assert_eq!(state.selection.ids(), vec![RowId::from("01")]);
        assert_eq!(state.rows().len(), 3);
    }

    #[test]
    fn test_export_uses_selection_or_filtered_rows() {
        let mut state = loaded(4);
        state.set_filter("status", FilterValue::Exact("active".into()));
        assert_eq!(state.export_rows().len(), 2);

        state.toggle_select(RowId::from("02"));
        let exported = state.export_rows();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].id, RowId::from("02"));

        let csv = state.export_csv().unwrap();
        assert!(csv.contains("item 02"));
        assert!(!csv.contains("item 00"));
    }

    #[test]
    fn test_export_of_empty_result_is_an_error() {
        let mut state = loaded(4);
        state.set_filter("status", FilterValue::Exact("archived".into()));
        assert!(state.export_rows().is_empty());
        assert!(matches!(state.export_csv(), Err(AdminError::Export(_))));
    }
}
