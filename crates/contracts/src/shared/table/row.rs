//! Нормализованная строка таблицы и значения её полей

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Разделитель для отображения массивов тегов одной строкой
pub const TAG_SEPARATOR: &str = ", ";

/// Стабильный идентификатор строки (берётся из `_id` бэкенда)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub String);

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Значение ячейки: скаляр или массив строк
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Tags(Vec<String>),
    Date(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Пустая строка превращается в `Null`
    pub fn text_or_null(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::Text(v),
            _ => Self::Null,
        }
    }

    pub fn number_or_null(value: Option<f64>) -> Self {
        value.map(Self::Number).unwrap_or(Self::Null)
    }

    pub fn date_or_null(value: Option<DateTime<Utc>>) -> Self {
        value.map(Self::Date).unwrap_or(Self::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            Self::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    /// Строковое представление для таблицы, поиска и экспорта
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => if *b { "Да" } else { "Нет" }.to_string(),
            Self::Tags(tags) => join_tags(tags),
            Self::Date(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Целые числа выводятся без дробной части
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Склеивает массив тегов в строку для отображения
pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// Разбирает строку "a, b, c" обратно в массив (пустые части отбрасываются)
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Плоская запись, готовая к отображению
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub fields: BTreeMap<String, FieldValue>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
            updated_at: None,
        }
    }

    /// Builder-стиль для заполнения полей
    pub fn with(mut self, field: &str, value: FieldValue) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    pub fn set(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Значение поля для отображения; отсутствующее поле даёт пустую строку
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(FieldValue::display).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join_tags() {
        assert_eq!(split_tags("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(split_tags("  ").is_empty());
        assert_eq!(
            join_tags(&["phones".to_string(), "sale".to_string()]),
            "phones, sale"
        );
    }

    #[test]
    fn test_display_values() {
        assert_eq!(FieldValue::Number(12.0).display(), "12");
        assert_eq!(FieldValue::Number(12.5).display(), "12.5");
        assert_eq!(FieldValue::Null.display(), "");
        assert_eq!(
            FieldValue::Tags(vec!["x".into(), "y".into()]).display(),
            "x, y"
        );
    }

    #[test]
    fn test_text_or_null() {
        assert_eq!(FieldValue::text_or_null(Some("  ".into())), FieldValue::Null);
        assert_eq!(FieldValue::text_or_null(None), FieldValue::Null);
        assert_eq!(
            FieldValue::text_or_null(Some("ok".into())),
            FieldValue::Text("ok".into())
        );
    }

    #[test]
    fn test_row_display_missing_field() {
        let row = Row::new("1").with("name", FieldValue::text("Phone"));
        assert_eq!(row.display("name"), "Phone");
        assert_eq!(row.display("vendor"), "");
    }
}
