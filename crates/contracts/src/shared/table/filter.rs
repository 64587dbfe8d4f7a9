//! Фильтры по колонкам таблицы

use super::row::{FieldValue, Row};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра для одного поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Подстрока без учёта регистра
    Substring(String),
    /// Точное совпадение (для текста без учёта регистра, для тегов точное)
    Exact(String),
    /// Числовой диапазон, границы включительно
    Range { min: Option<f64>, max: Option<f64> },
    /// Нижняя граница даты
    DateFrom(DateTime<Utc>),
    /// Диапазон дат, границы включительно
    DateRange {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
}

impl FilterValue {
    /// Пустой фильтр не накладывает ограничений
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Substring(s) | Self::Exact(s) => s.trim().is_empty(),
            Self::Range { min, max } => min.is_none() && max.is_none(),
            Self::DateFrom(_) => false,
            Self::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    /// Проверяет значение поля строки
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        if self.is_empty() {
            return true;
        }
        let value = match value {
            Some(v) if !v.is_null() => v,
            _ => return false,
        };

        match self {
            Self::Substring(needle) | Self::Exact(needle) => {
                if let Some(tags) = value.as_tags() {
                    let needle = needle.trim();
                    return tags.iter().any(|tag| tag == needle);
                }
                let haystack = value.display().to_lowercase();
                let needle = needle.trim().to_lowercase();
                if matches!(self, Self::Exact(_)) {
                    haystack == needle
                } else {
                    haystack.contains(&needle)
                }
            }
            Self::Range { min, max } => match value.as_number() {
                Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                None => false,
            },
            Self::DateFrom(from) => value.as_date().map_or(false, |d| d >= *from),
            Self::DateRange { from, to } => match value.as_date() {
                Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
                None => false,
            },
        }
    }

    /// Короткая подпись для чипа активного фильтра
    pub fn label(&self) -> String {
        match self {
            Self::Substring(s) => format!("содержит \"{}\"", s.trim()),
            Self::Exact(s) => format!("= {}", s.trim()),
            Self::Range { min, max } => match (min, max) {
                (Some(a), Some(b)) => format!("{} – {}", a, b),
                (Some(a), None) => format!("≥ {}", a),
                (None, Some(b)) => format!("≤ {}", b),
                (None, None) => String::new(),
            },
            Self::DateFrom(d) => format!("с {}", d.format("%d.%m.%Y")),
            Self::DateRange { from, to } => {
                let f = from.map(|d| d.format("%d.%m.%Y").to_string()).unwrap_or_default();
                let t = to.map(|d| d.format("%d.%m.%Y").to_string()).unwrap_or_default();
                format!("{} – {}", f, t)
            }
        }
    }
}

/// Набор фильтров: поле -> значение. Отсутствующее поле не ограничивает выборку.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    entries: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-стиль для тестов и начальных значений
    pub fn with(mut self, field: &str, value: FilterValue) -> Self {
        self.set(field, value);
        self
    }

    /// Пустое значение удаляет запись
    pub fn set(&mut self, field: &str, value: FilterValue) {
        if value.is_empty() {
            self.entries.remove(field);
        } else {
            self.entries.insert(field.to_string(), value);
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.entries.remove(field);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.entries.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.entries.iter()
    }

    /// Количество активных фильтров (для бейджа)
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Все фильтры объединяются по И
    pub fn matches(&self, row: &Row) -> bool {
        self.entries
            .iter()
            .all(|(field, value)| value.matches(row.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let f = FilterValue::Substring("PHO".into());
        assert!(f.matches(Some(&FieldValue::text("iPhone"))));
        assert!(!f.matches(Some(&FieldValue::text("Laptop"))));
    }

    #[test]
    fn test_exact_text() {
        let f = FilterValue::Exact("active".into());
        assert!(f.matches(Some(&FieldValue::text("Active"))));
        assert!(!f.matches(Some(&FieldValue::text("inactive"))));
    }

    #[test]
    fn test_range_bounds_inclusive_and_optional() {
        let both = FilterValue::Range { min: Some(10.0), max: Some(20.0) };
        assert!(both.matches(Some(&FieldValue::Number(10.0))));
        assert!(both.matches(Some(&FieldValue::Number(20.0))));
        assert!(!both.matches(Some(&FieldValue::Number(20.5))));

        let min_only = FilterValue::Range { min: Some(5.0), max: None };
        assert!(min_only.matches(Some(&FieldValue::Number(1000.0))));
        assert!(!min_only.matches(Some(&FieldValue::Number(4.0))));
        assert!(!min_only.matches(Some(&FieldValue::Null)));
    }

    #[test]
    fn test_tags_require_exact_element() {
        let tags = FieldValue::Tags(vec!["sale".into(), "new".into()]);
        assert!(FilterValue::Substring("sale".into()).matches(Some(&tags)));
        assert!(!FilterValue::Substring("sal".into()).matches(Some(&tags)));
        assert!(!FilterValue::Exact("Sale".into()).matches(Some(&tags)));
    }

    #[test]
    fn test_date_filters() {
        let value = FieldValue::Date(date(2024, 3, 15));
        assert!(FilterValue::DateFrom(date(2024, 3, 15)).matches(Some(&value)));
        assert!(!FilterValue::DateFrom(date(2024, 3, 16)).matches(Some(&value)));

        let range = FilterValue::DateRange {
            from: Some(date(2024, 1, 1)),
            to: Some(date(2024, 2, 1)),
        };
        assert!(!range.matches(Some(&value)));
        let open = FilterValue::DateRange { from: Some(date(2024, 1, 1)), to: None };
        assert!(open.matches(Some(&value)));
    }

    #[test]
    fn test_missing_field_fails_active_filter() {
        let f = FilterValue::Substring("x".into());
        assert!(!f.matches(None));
        assert!(FilterValue::Substring("  ".into()).matches(None));
    }

    #[test]
    fn test_set_empty_removes_entry() {
        let mut set = FilterSet::new().with("name", FilterValue::Substring("a".into()));
        assert_eq!(set.active_count(), 1);
        set.set("name", FilterValue::Substring(String::new()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_filter_set_is_conjunction() {
        let row = Row::new("1")
            .with("status", FieldValue::text("active"))
            .with("price", FieldValue::Number(50.0));
        let set = FilterSet::new()
            .with("status", FilterValue::Exact("active".into()))
            .with("price", FilterValue::Range { min: Some(60.0), max: None });
        assert!(!set.matches(&row));
    }
}
