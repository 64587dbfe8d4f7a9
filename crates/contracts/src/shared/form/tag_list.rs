//! Упорядоченный список строковых значений (размеры, подкатегории, теги)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for value in values {
            list.add(value.as_ref());
        }
        list
    }

    /// Добавляет значение без пробелов по краям.
    /// Пустые значения и повторы молча отбрасываются.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.0.iter().any(|v| v == value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Добавляет сразу несколько значений из строки "a, b, c"
    pub fn add_many(&mut self, input: &str) -> usize {
        input.split(',').filter(|part| self.add(part)).count()
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_duplicates() {
        let mut list = TagList::new();
        assert!(list.add(" XL "));
        assert!(!list.add("XL"));
        assert!(!list.add("   "));
        assert!(list.add("M"));
        assert_eq!(list.values(), &["XL".to_string(), "M".to_string()]);
    }

    #[test]
    fn test_add_many_and_remove() {
        let mut list = TagList::new();
        assert_eq!(list.add_many("a, b,, a , c"), 3);
        assert_eq!(list.remove(1), Some("b".to_string()));
        assert_eq!(list.remove(10), None);
        assert_eq!(list.to_vec(), vec!["a".to_string(), "c".to_string()]);
    }
}
