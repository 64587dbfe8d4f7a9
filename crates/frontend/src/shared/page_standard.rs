//! Категории страниц, открываемых во вкладках.
//!
//! Каждая страница объявляет `id` в формате `{entity}--{category}`
//! (например `"a002_product--list"`) и `data-page-category`.
//! По `id` из инспектора DOM легко найти каталог `domain/a002_product/`.

/// Список записей: таблица с фильтрами и пагинацией.
pub const PAGE_CAT_LIST: &str = "list";

/// Форма добавления или редактирования одной записи.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Проверка формата `{entity}--{category}`.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_category--list"));
        assert!(!is_valid_page_id("a001_category"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_product--"));
    }
}
