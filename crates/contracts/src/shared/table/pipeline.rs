//! Конвейер: поиск -> фильтры -> сортировка

use super::filter::FilterSet;
use super::row::Row;
use super::search::{normalize_query, row_matches};
use super::sort::{sort_rows, SortSpec};

/// Возвращает отфильтрованные и отсортированные строки.
///
/// Результат всегда подмножество входа; при равных ключах сортировки
/// сохраняется исходный порядок.
pub fn apply(
    rows: &[Row],
    filters: &FilterSet,
    sort: Option<&SortSpec>,
    search: &str,
    searchable: &[&str],
) -> Vec<Row> {
    let needle = normalize_query(search);

    let mut result: Vec<Row> = rows
        .iter()
        .filter(|row| match &needle {
            Some(n) => row_matches(row, searchable, n),
            None => true,
        })
        .filter(|row| filters.matches(row))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        sort_rows(&mut result, spec);
    }

    log::debug!(
        "table pipeline: {} -> {} rows (filters: {}, search: {:?})",
        rows.len(),
        result.len(),
        filters.active_count(),
        needle
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::filter::FilterValue;
    use crate::shared::table::row::FieldValue;
    use crate::shared::table::sort::SortDirection;

    const SEARCHABLE: &[&str] = &["name", "sku", "tags"];

    fn sample() -> Vec<Row> {
        vec![
            Row::new("1")
                .with("name", FieldValue::text("iPhone 15"))
                .with("status", FieldValue::text("active"))
                .with("price", FieldValue::Number(999.0))
                .with("tags", FieldValue::Tags(vec!["apple".into(), "phone".into()])),
            Row::new("2")
                .with("name", FieldValue::text("Pixel 8"))
                .with("status", FieldValue::text("draft"))
                .with("price", FieldValue::Number(699.0))
                .with("tags", FieldValue::Tags(vec!["google".into(), "phone".into()])),
            Row::new("3")
                .with("name", FieldValue::text("MacBook Air"))
                .with("status", FieldValue::text("active"))
                .with("price", FieldValue::Number(1199.0))
                .with("tags", FieldValue::Tags(vec!["apple".into(), "laptop".into()])),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_status_filter_keeps_only_active() {
        let rows = vec![
            Row::new("a").with("status", FieldValue::text("active")),
            Row::new("b").with("status", FieldValue::text("draft")),
            Row::new("c").with("status", FieldValue::text("inactive")),
            Row::new("d").with("status", FieldValue::text("Active")),
            Row::new("e").with("status", FieldValue::Null),
            Row::new("f"),
        ];
        let filters = FilterSet::new().with("status", FilterValue::Exact("active".into()));
        let result = apply(&rows, &filters, None, "", SEARCHABLE);
        assert_eq!(ids(&result), vec!["a", "d"]);
    }

    #[test]
    fn test_search_then_filter_then_sort() {
        let filters = FilterSet::new().with("tags", FilterValue::Exact("apple".into()));
        let sort = SortSpec::new("price", SortDirection::Descending);
        let result = apply(&sample(), &filters, Some(&sort), "", SEARCHABLE);
        assert_eq!(ids(&result), vec!["3", "1"]);

        let result = apply(&sample(), &FilterSet::new(), None, "PHONE", SEARCHABLE);
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_result_is_subset_and_idempotent() {
        let rows = sample();
        let filters = FilterSet::new()
            .with("price", FilterValue::Range { min: Some(700.0), max: None })
            .with("status", FilterValue::Exact("active".into()));

        let once = apply(&rows, &filters, None, "a", SEARCHABLE);
        assert!(once.iter().all(|r| rows.contains(r)));

        let twice = apply(&once, &filters, None, "a", SEARCHABLE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_sort_keeps_input_order() {
        let result = apply(&sample(), &FilterSet::new(), None, "", SEARCHABLE);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }
}
