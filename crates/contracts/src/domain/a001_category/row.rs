//! Нормализация категорий в строки таблицы

use super::aggregate::Category;
use crate::domain::common::table_entity::require;
use crate::domain::common::{NormalizeWarning, TableEntity};
use crate::shared::metadata::{ColumnMeta, FilterWidget, TableSchema};
use crate::shared::table::{FieldValue, Row, RowId, SortDirection, SortSpec};

pub const ENTITY_NAME: &str = "category";

const COLUMNS: &[ColumnMeta] = &[
    ColumnMeta::text("name", "Категория"),
    ColumnMeta::text("product_type", "Тип товара"),
    ColumnMeta::text("description", "Описание").hidden(),
    ColumnMeta::text("status", "Статус").with_filter(FilterWidget::Select),
    ColumnMeta::tags("children", "Подкатегории"),
    ColumnMeta::number("children_count", "Подкатегорий"),
    ColumnMeta::number("product_count", "Товаров"),
    ColumnMeta::date("created_at", "Создана"),
    ColumnMeta::text("img", "Изображение").hidden(),
];

pub const CATEGORY_SCHEMA: TableSchema = TableSchema {
    entity_name: ENTITY_NAME,
    list_name: "Категории",
    columns: COLUMNS,
    searchable: &["name", "product_type", "description", "children"],
    default_sort: Some(("name", SortDirection::Ascending)),
    export_name: "categories",
};

/// Варианты сортировки из выпадающего списка над таблицей
pub const SORT_OPTIONS: &[(&str, &str, SortDirection)] = &[
    ("По алфавиту", "name", SortDirection::Ascending),
    ("По количеству товаров", "product_count", SortDirection::Descending),
    ("По количеству подкатегорий", "children_count", SortDirection::Descending),
    ("По дате создания", "created_at", SortDirection::Descending),
];

pub fn sort_option_spec(label: &str) -> Option<SortSpec> {
    SORT_OPTIONS
        .iter()
        .find(|(l, _, _)| *l == label)
        .map(|(_, field, direction)| SortSpec::new(*field, *direction))
}

/// Категории для строк текущей страницы в том же порядке.
///
/// Строка без `_id` получила идентификатор `#<позиция>` при нормализации.
/// Строки, для которых категория не нашлась, пропускаются.
pub fn categories_for_rows<'a>(
    categories: &'a [Category],
    rows: &[Row],
) -> Vec<(RowId, &'a Category)> {
    rows.iter()
        .filter_map(|row| {
            let category = match row.id.as_str().strip_prefix('#') {
                Some(index) => index.parse::<usize>().ok().and_then(|i| categories.get(i)),
                None => categories.iter().find(|c| c.id.trim() == row.id.as_str()),
            }?;
            Some((row.id.clone(), category))
        })
        .collect()
}

impl TableEntity for Category {
    fn entity_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn schema() -> TableSchema {
        CATEGORY_SCHEMA
    }

    fn to_row(&self) -> (Row, Vec<NormalizeWarning>) {
        let mut warnings = Vec::new();
        require(&mut warnings, ENTITY_NAME, &self.id, "_id", Some(&self.id));
        require(&mut warnings, ENTITY_NAME, &self.id, "parent", Some(&self.parent));

        let row = Row::new(self.id.trim())
            .with("name", FieldValue::text_or_null(Some(self.parent.clone())))
            .with("product_type", FieldValue::text_or_null(self.product_type.clone()))
            .with("description", FieldValue::text_or_null(self.description.clone()))
            .with("status", FieldValue::text_or_null(self.status.clone()))
            .with("img", FieldValue::text_or_null(self.img.clone()))
            .with("children", FieldValue::Tags(self.children.clone()))
            .with("children_count", FieldValue::Number(self.children_count() as f64))
            .with("product_count", FieldValue::Number(self.product_count() as f64))
            .with("created_at", FieldValue::date_or_null(self.created_at));

        let row = Row {
            updated_at: self.updated_at.or(self.created_at),
            ..row
        };

        (row, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{pipeline, FilterSet, FilterValue, RowId};

    fn category(id: &str, parent: &str, status: &str, children: &[&str]) -> Category {
        Category {
            id: id.into(),
            parent: parent.into(),
            status: Some(status.into()),
            product_type: Some("electronics".into()),
            children: children.iter().map(|c| c.to_string()).collect(),
            ..Category::default()
        }
    }

    #[test]
    fn test_to_row() {
        let (row, warnings) = category("c1", "Phones", "Show", &["Android", "iOS"]).to_row();
        assert!(warnings.is_empty());
        assert_eq!(row.id, RowId::from("c1"));
        assert_eq!(row.display("name"), "Phones");
        assert_eq!(row.display("children"), "Android, iOS");
        assert_eq!(row.display("children_count"), "2");
        assert_eq!(row.get("created_at"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_missing_parent_warns() {
        let (row, warnings) = category("c1", "  ", "Show", &[]).to_row();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "parent");
        assert!(row.get("name").map_or(false, FieldValue::is_null));
    }

    #[test]
    fn test_search_in_children_and_status_filter() {
        let rows: Vec<Row> = vec![
            category("1", "Phones", "Show", &["Android"]),
            category("2", "Laptops", "Hide", &["Gaming"]),
            category("3", "Tablets", "Show", &["iPad"]),
        ]
        .iter()
        .map(|c| c.to_row().0)
        .collect();

        let found = pipeline::apply(&rows, &FilterSet::new(), None, "gaming", CATEGORY_SCHEMA.searchable);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, RowId::from("2"));

        let filters = FilterSet::new().with("status", FilterValue::Exact("show".into()));
        let shown = pipeline::apply(&rows, &filters, sort_option_spec("По алфавиту").as_ref(), "", CATEGORY_SCHEMA.searchable);
        let ids: Vec<&str> = shown.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_sort_options() {
        assert_eq!(
            sort_option_spec("По количеству товаров"),
            Some(SortSpec::new("product_count", SortDirection::Descending))
        );
        assert_eq!(sort_option_spec("unknown"), None);
    }

    #[test]
    fn test_categories_for_rows_follow_page_order() {
        let categories = vec![
            category("1", "Phones", "Show", &[]),
            category("", "Orphan", "Show", &[]),
            category("3", "Tablets", "Hide", &[]),
        ];
        let rows = crate::domain::common::normalize_all(&categories);
        let page = vec![rows[2].clone(), rows[1].clone()];
        let matched = categories_for_rows(&categories, &page);
        let found: Vec<(&str, &str)> = matched
            .iter()
            .map(|(id, c)| (id.as_str(), c.parent.as_str()))
            .collect();
        assert_eq!(found, vec![("3", "Tablets"), ("#1", "Orphan")]);

        let stale = vec![Row::new("gone"), rows[0].clone()];
        let found = categories_for_rows(&categories, &stale);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, RowId::from("1"));
    }
}
