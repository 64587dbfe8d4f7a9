//! Множественный выбор строк и результат групповых операций

use super::row::RowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Выбранные идентификаторы строк
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: BTreeSet<RowId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.ids.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }

    /// Добавляет, если нет; убирает, если есть
    pub fn toggle(&mut self, id: RowId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn set_checked(&mut self, id: RowId, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Совпадает ли выбор ровно с видимыми строками
    pub fn equals_visible<'a>(&self, visible: impl IntoIterator<Item = &'a RowId>) -> bool {
        let visible: BTreeSet<&RowId> = visible.into_iter().collect();
        !visible.is_empty()
            && visible.len() == self.ids.len()
            && visible.iter().all(|id| self.ids.contains(*id))
    }

    /// Чекбокс "выбрать все на странице": если уже выбрана ровно страница,
    /// снимаем выбор, иначе выбираем ровно видимые строки.
    /// Пустая страница выбор не меняет.
    pub fn toggle_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a RowId> + Clone) {
        if visible.clone().into_iter().next().is_none() {
            return;
        }
        if self.equals_visible(visible.clone()) {
            self.ids.clear();
        } else {
            self.ids = visible.into_iter().cloned().collect();
        }
    }

    /// Оставляет только идентификаторы, которые есть в новых данных
    pub fn prune<'a>(&mut self, known: impl IntoIterator<Item = &'a RowId>) -> usize {
        let known: BTreeSet<&RowId> = known.into_iter().collect();
        let before = self.ids.len();
        self.ids.retain(|id| known.contains(id));
        before - self.ids.len()
    }

    /// После групповой операции в выборе остаются только неудавшиеся строки
    pub fn retain_failed(&mut self, outcome: &BulkOutcome) {
        self.ids = outcome.failed.iter().map(|(id, _)| id.clone()).collect();
    }
}

/// Результат групповой операции по строкам
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: Vec<RowId>,
    pub failed: Vec<(RowId, String)>,
}

impl BulkOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: RowId, result: Result<(), String>) {
        match result {
            Ok(()) => self.succeeded.push(id),
            Err(e) => self.failed.push((id, e)),
        }
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_ids(&self) -> Vec<RowId> {
        self.failed.iter().map(|(id, _)| id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<RowId> {
        values.iter().map(|v| RowId::from(*v)).collect()
    }

    #[test]
    fn test_toggle_single() {
        let mut sel = SelectionSet::new();
        sel.toggle(RowId::from("a"));
        assert!(sel.contains(&RowId::from("a")));
        sel.toggle(RowId::from("a"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_twice_clears() {
        let page = ids(&["1", "2", "3"]);
        let mut sel = SelectionSet::new();
        sel.toggle_all(page.iter());
        assert_eq!(sel.len(), 3);
        sel.toggle_all(page.iter());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_with_partial_selection_selects_exactly_page() {
        let page = ids(&["1", "2"]);
        let mut sel = SelectionSet::new();
        sel.toggle(RowId::from("1"));
        sel.toggle(RowId::from("other-page"));
        sel.toggle_all(page.iter());
        assert_eq!(sel.ids(), page);
    }

    #[test]
    fn test_toggle_all_on_empty_page_is_noop() {
        let mut sel = SelectionSet::new();
        let empty: Vec<RowId> = Vec::new();
        sel.toggle_all(empty.iter());
        assert!(sel.is_empty());

        // выбор с других страниц не сбрасывается
        sel.toggle(RowId::from("page-1"));
        sel.toggle_all(empty.iter());
        assert_eq!(sel.ids(), ids(&["page-1"]));
    }

    #[test]
    fn test_prune_stale_ids() {
        let mut sel = SelectionSet::new();
        for id in ids(&["1", "2", "3"]) {
            sel.toggle(id);
        }
        let fresh = ids(&["2", "3", "4"]);
        assert_eq!(sel.prune(fresh.iter()), 1);
        assert_eq!(sel.ids(), ids(&["2", "3"]));
    }

    #[test]
    fn test_partial_bulk_failure_keeps_failed_only() {
        let mut sel = SelectionSet::new();
        for id in ids(&["1", "2", "3"]) {
            sel.toggle(id);
        }
        let mut outcome = BulkOutcome::new();
        outcome.record(RowId::from("1"), Ok(()));
        outcome.record(RowId::from("2"), Err("HTTP 500".into()));
        outcome.record(RowId::from("3"), Ok(()));

        sel.retain_failed(&outcome);
        assert_eq!(sel.ids(), ids(&["2"]));
        assert!(!outcome.is_complete_success());
        assert_eq!(outcome.failed_ids(), ids(&["2"]));
    }
}
