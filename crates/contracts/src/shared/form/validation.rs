//! Результат проверки формы: ошибки по полям

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Поле -> сообщение об ошибке
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Первая ошибка по полю остаётся, последующие игнорируются
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Складывает результат проверки поля
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Правка поля снимает его ошибку
    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_validation(self) -> Validation {
        if self.is_empty() {
            Validation::Valid
        } else {
            Validation::Invalid(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Итог синхронной проверки перед отправкой
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(ValidationErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins_and_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.add("parent", "Родительская категория обязательна");
        errors.add("parent", "другое");
        errors.check("product_type", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("parent"), Some("Родительская категория обязательна"));

        errors.clear_field("parent");
        assert!(errors.into_validation().is_valid());
    }

    #[test]
    fn test_invalid_exposes_errors() {
        let mut errors = ValidationErrors::new();
        errors.check("title", Err("Название обязательно".into()));
        let validation = errors.into_validation();
        assert!(!validation.is_valid());
        assert!(validation.errors().is_some_and(|e| e.contains("title")));
    }
}
