//! Сортировка строк таблицы по одному полю

use super::row::{FieldValue, Row};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// Активная сортировка: одно поле и направление
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }
}

/// Клик по заголовку: то же поле меняет направление, новое поле заменяет сортировку
pub fn toggle_sort(current: Option<&SortSpec>, field: &str) -> SortSpec {
    match current {
        Some(spec) if spec.field == field => SortSpec::new(field, spec.direction.flipped()),
        _ => SortSpec::ascending(field),
    }
}

/// Сравнение строк без учёта регистра (аналог localeCompare для UI)
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сравнивает два значения поля. `Null` меньше любого значения.
/// Теги сравниваются по отображаемой строке, как их видит пользователь.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let a = a.unwrap_or(&FieldValue::Null);
    let b = b.unwrap_or(&FieldValue::Null);

    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
        (FieldValue::Null, _) => Ordering::Less,
        (_, FieldValue::Null) => Ordering::Greater,
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (x, y) => locale_cmp(&x.display(), &y.display()),
    }
}

/// Стабильная сортировка: строки с равными ключами сохраняют исходный порядок
pub fn sort_rows(rows: &mut [Row], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let cmp = compare_values(a.get(&spec.field), b.get(&spec.field));
        match spec.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Получить индикатор сортировки для заголовка
pub fn sort_indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => {
            if spec.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, price: f64) -> Row {
        Row::new(id)
            .with("name", FieldValue::text(name))
            .with("price", FieldValue::Number(price))
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_sort() {
        let first = toggle_sort(None, "name");
        assert_eq!(first, SortSpec::ascending("name"));

        let second = toggle_sort(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);

        let other = toggle_sort(Some(&second), "price");
        assert_eq!(other, SortSpec::ascending("price"));
    }

    #[test]
    fn test_numeric_sort_is_numeric() {
        let mut rows = vec![row("a", "x", 100.0), row("b", "y", 9.0), row("c", "z", 20.0)];
        sort_rows(&mut rows, &SortSpec::ascending("price"));
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_string_sort_ignores_case() {
        let mut rows = vec![row("1", "banana", 0.0), row("2", "Apple", 0.0), row("3", "cherry", 0.0)];
        sort_rows(&mut rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let mut rows = vec![
            row("1", "b", 1.0),
            row("2", "a", 1.0),
            row("3", "b", 1.0),
            row("4", "a", 1.0),
        ];
        sort_rows(&mut rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3"]);

        sort_rows(&mut rows, &SortSpec::new("name", SortDirection::Descending));
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_tags_sort_by_displayed_text() {
        let tagged = |id: &str, tags: &[&str]| {
            Row::new(id).with("tags", FieldValue::Tags(tags.iter().map(|t| t.to_string()).collect()))
        };
        let mut rows = vec![
            tagged("1", &["phone"]),
            tagged("2", &["Apple", "phone", "case"]),
            tagged("3", &["books"]),
        ];
        sort_rows(&mut rows, &SortSpec::ascending("tags"));
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_nulls_first_when_ascending() {
        let mut rows = vec![row("1", "b", 1.0), Row::new("2"), row("3", "a", 1.0)];
        sort_rows(&mut rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::ascending("name");
        assert_eq!(sort_indicator(Some(&spec), "name"), " ▲");
        assert_eq!(sort_indicator(Some(&spec), "price"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}
