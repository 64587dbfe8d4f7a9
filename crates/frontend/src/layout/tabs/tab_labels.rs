//! Заголовки табов. Для списков берётся `list_name` из схемы таблицы.

use contracts::domain::a001_category::CATEGORY_SCHEMA;
use contracts::domain::a002_product::PRODUCT_SCHEMA;

/// Читаемый заголовок таба для ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_category" => CATEGORY_SCHEMA.list_name,
        "a002_product" => PRODUCT_SCHEMA.list_name,
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a001_category"), "Категории");
        assert_eq!(tab_label_for_key("a002_product"), "Товары");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
