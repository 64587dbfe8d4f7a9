//! Поиск по фиксированному набору полей

use super::row::{FieldValue, Row};

/// Нормализует поисковый запрос; пустой запрос означает "без поиска"
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Проверяет, содержит ли хотя бы одно из полей запрос (без учёта регистра).
/// `needle` уже приведён к нижнему регистру.
pub fn row_matches(row: &Row, fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| match row.get(field) {
        Some(FieldValue::Tags(tags)) => tags.iter().any(|t| t.to_lowercase().contains(needle)),
        Some(FieldValue::Null) | None => false,
        Some(value) => value.display().to_lowercase().contains(needle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  "), None);
        assert_eq!(normalize_query(" iPhone "), Some("iphone".to_string()));
    }

    #[test]
    fn test_row_matches_any_field() {
        let row = Row::new("1")
            .with("name", FieldValue::text("Galaxy S24"))
            .with("sku", FieldValue::text("SM-S921"))
            .with("tags", FieldValue::Tags(vec!["Android".into()]));
        let fields = ["name", "sku", "vendor", "tags"];
        assert!(row_matches(&row, &fields, "s921"));
        assert!(row_matches(&row, &fields, "andr"));
        assert!(!row_matches(&row, &fields, "apple"));
        assert!(!row_matches(&row, &["price"], "galaxy"));
    }
}
