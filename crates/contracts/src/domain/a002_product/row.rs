//! Нормализация товаров в строки таблицы

use super::aggregate::Product;
use crate::domain::common::table_entity::require;
use crate::domain::common::{NormalizeWarning, TableEntity};
use crate::shared::metadata::{ColumnMeta, FilterWidget, TableSchema};
use crate::shared::table::{FieldValue, Row, SortDirection};

pub const ENTITY_NAME: &str = "product";

const COLUMNS: &[ColumnMeta] = &[
    ColumnMeta::text("id", "ID").hidden(),
    ColumnMeta::text("name", "Название"),
    ColumnMeta::text("sku", "Артикул"),
    ColumnMeta::number("price", "Цена"),
    ColumnMeta::text("status", "Статус").with_filter(FilterWidget::Select),
    ColumnMeta::number("inventory", "Остаток"),
    ColumnMeta::text("category", "Категория"),
    ColumnMeta::text("brand", "Бренд"),
    ColumnMeta::text("vendor", "Поставщик").hidden(),
    ColumnMeta::text("sales_channel", "Канал продаж").hidden(),
    ColumnMeta::date("created_at", "Создан"),
    ColumnMeta::date("updated_at", "Изменён").hidden(),
    ColumnMeta::tags("tags", "Теги"),
];

pub const PRODUCT_SCHEMA: TableSchema = TableSchema {
    entity_name: ENTITY_NAME,
    list_name: "Товары",
    columns: COLUMNS,
    searchable: &["name", "sku", "vendor", "category", "tags"],
    default_sort: Some(("name", SortDirection::Ascending)),
    export_name: "products",
};

impl TableEntity for Product {
    fn entity_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn schema() -> TableSchema {
        PRODUCT_SCHEMA
    }

    fn to_row(&self) -> (Row, Vec<NormalizeWarning>) {
        let mut warnings = Vec::new();
        require(&mut warnings, ENTITY_NAME, &self.id, "_id", Some(&self.id));
        require(&mut warnings, ENTITY_NAME, &self.id, "title", self.title.as_deref());

        let category = self.category.as_ref().map(|c| c.name.clone());
        let brand = self.brand.as_ref().map(|b| b.name.clone());

        let row = Row::new(self.id.trim())
            .with("id", FieldValue::text_or_null(Some(self.id.clone())))
            .with("name", FieldValue::text_or_null(self.title.clone()))
            .with("sku", FieldValue::text_or_null(self.sku.clone()))
            .with("price", FieldValue::number_or_null(self.price))
            .with("status", FieldValue::text_or_null(self.status.clone()))
            .with("inventory", FieldValue::number_or_null(self.quantity))
            .with("category", FieldValue::text_or_null(category))
            .with("brand", FieldValue::text_or_null(brand))
            .with("vendor", FieldValue::Null)
            .with("sales_channel", FieldValue::Null)
            .with("created_at", FieldValue::date_or_null(self.created_at))
            .with("updated_at", FieldValue::date_or_null(self.updated_at))
            .with("tags", FieldValue::Tags(self.tags.clone()));

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
    use crate::domain::a002_product::aggregate::CategoryRef;
    use crate::domain::common::normalize_all;
    use crate::shared::table::{pipeline, FilterSet, FilterValue, RowId, SortSpec};

    fn product(id: &str, title: &str, status: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            title: Some(title.into()),
            sku: Some(format!("SKU-{}", id)),
            price: Some(price),
            status: Some(status.into()),
            quantity: Some(3.0),
            category: Some(CategoryRef {
                name: "Phones".into(),
                id: "c1".into(),
            }),
            tags: vec!["sale".into(), "new".into()],
            ..Product::default()
        }
    }

    #[test]
    fn test_to_row_flattens_and_renames() {
        let (row, warnings) = product("p1", "iPhone", "active", 999.0).to_row();
        assert!(warnings.is_empty());
        assert_eq!(row.id, RowId::from("p1"));
        assert_eq!(row.display("name"), "iPhone");
        assert_eq!(row.display("category"), "Phones");
        assert_eq!(row.get("inventory"), Some(&FieldValue::Number(3.0)));
        assert_eq!(row.get("vendor"), Some(&FieldValue::Null));
        assert_eq!(row.get("brand"), Some(&FieldValue::Null));
        assert_eq!(row.display("tags"), "sale, new");
    }

    #[test]
    fn test_missing_title_and_id_warn() {
        let raw = Product {
            title: None,
            ..Product::default()
        };
        let (_, warnings) = raw.to_row();
        let fields: Vec<&str> = warnings.iter().map(|w| w.field).collect();
        assert_eq!(fields, vec!["_id", "title"]);

        let rows = normalize_all(&[raw.clone(), raw]);
        assert_eq!(rows[0].id, RowId::from("#0"));
        assert_eq!(rows[1].id, RowId::from("#1"));
    }

    #[test]
    fn test_status_filter_keeps_active_only() {
        let rows: Vec<Row> = normalize_all(&[
            product("1", "A", "active", 10.0),
            product("2", "B", "draft", 20.0),
            product("3", "C", "inactive", 30.0),
        ]);
        let filters = FilterSet::new().with("status", FilterValue::Exact("active".into()));
        let result = pipeline::apply(&rows, &filters, None, "", PRODUCT_SCHEMA.searchable);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, RowId::from("1"));
    }

    #[test]
    fn test_search_by_sku_and_price_sort() {
        let rows: Vec<Row> = normalize_all(&[
            product("1", "Case", "active", 100.0),
            product("2", "Cable", "active", 9.0),
            product("3", "Charger", "active", 20.0),
        ]);
        let found = pipeline::apply(&rows, &FilterSet::new(), None, "sku-3", PRODUCT_SCHEMA.searchable);
        assert_eq!(found.len(), 1);

        let sorted = pipeline::apply(
            &rows,
            &FilterSet::new(),
            Some(&SortSpec::ascending("price")),
            "",
            PRODUCT_SCHEMA.searchable,
        );
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_export_headers_follow_row_shape() {
        let headers = PRODUCT_SCHEMA.export_headers();
        assert_eq!(headers.len(), 13);
        assert_eq!(headers[0], "ID");
        assert_eq!(headers[12], "Теги");
    }
}
