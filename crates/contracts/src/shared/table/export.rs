//! Формирование CSV для выгрузки в Excel

use super::row::Row;
use super::selection::SelectionSet;
use crate::shared::metadata::TableSchema;

/// Какие строки выгружать: выбранные, если выбор не пуст, иначе все отфильтрованные
pub fn rows_for_export(filtered: &[Row], selection: &SelectionSet) -> Vec<Row> {
    if selection.is_empty() {
        filtered.to_vec()
    } else {
        filtered
            .iter()
            .filter(|row| selection.contains(&row.id))
            .cloned()
            .collect()
    }
}

/// Собирает CSV (разделитель `;`, UTF-8 BOM для корректного отображения кириллицы в Excel)
pub fn build_csv(schema: &TableSchema, rows: &[Row]) -> Result<String, String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = schema
        .export_headers()
        .into_iter()
        .map(escape_csv_cell)
        .collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = schema
            .columns
            .iter()
            .map(|column| escape_csv_cell(&row.display(column.field)))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Имя файла выгрузки: `<prefix>_<YYYY-MM-DD>.csv`
pub fn export_filename(schema: &TableSchema, today: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", schema.export_name, today.format("%Y-%m-%d"))
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::ColumnMeta;
    use crate::shared::table::row::{FieldValue, RowId};

    const COLUMNS: &[ColumnMeta] = &[
        ColumnMeta::text("name", "Название"),
        ColumnMeta::number("price", "Цена"),
        ColumnMeta::tags("tags", "Теги"),
    ];

    const SCHEMA: TableSchema = TableSchema {
        entity_name: "test",
        list_name: "Тест",
        columns: COLUMNS,
        searchable: &["name"],
        default_sort: None,
        export_name: "test",
    };

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1")
                .with("name", FieldValue::text("Chair; oak"))
                .with("price", FieldValue::Number(10.0))
                .with("tags", FieldValue::Tags(vec!["a".into(), "b".into()])),
            Row::new("2").with("name", FieldValue::text("Table \"XL\"")),
        ]
    }

    #[test]
    fn test_build_csv_uses_labels_and_escapes() {
        let csv = build_csv(&SCHEMA, &rows()).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Название;Цена;Теги");
        assert_eq!(lines[1], "\"Chair; oak\";10;a, b");
        assert_eq!(lines[2], "\"Table \"\"XL\"\"\";;");
    }

    #[test]
    fn test_empty_export_is_error() {
        assert!(build_csv(&SCHEMA, &[]).is_err());
    }

    #[test]
    fn test_selected_subset_is_exported() {
        let all = rows();
        let mut selection = SelectionSet::new();
        assert_eq!(rows_for_export(&all, &selection).len(), 2);

        selection.toggle(RowId::from("2"));
        let subset = rows_for_export(&all, &selection);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].id, RowId::from("2"));
    }

    #[test]
    fn test_export_filename() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(export_filename(&SCHEMA, day), "test_2024-05-01.csv");
    }
}
