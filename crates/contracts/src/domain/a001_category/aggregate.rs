use crate::domain::common::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Статус категории: показывать на витрине или скрыть
pub const STATUS_SHOW: &str = "Show";
pub const STATUS_HIDE: &str = "Hide";
pub const STATUS_OPTIONS: &[&str] = &[STATUS_SHOW, STATUS_HIDE];

/// Категория из `GET /category/all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parent: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "productType", default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub img: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<String>,

    /// Товары категории; содержимое не разбирается, важно только количество
    #[serde(default)]
    pub products: Option<Vec<serde_json::Value>>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn product_count(&self) -> usize {
        self.products.as_ref().map_or(0, Vec::len)
    }

    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    /// Товары с названием; записи без `title` пропускаются
    pub fn product_previews(&self) -> Vec<ProductPreview> {
        self.products
            .iter()
            .flatten()
            .filter_map(|p| {
                let title = p.get("title")?.as_str()?.trim();
                (!title.is_empty()).then(|| ProductPreview {
                    title: title.to_string(),
                    price: p.get("price").and_then(serde_json::Value::as_f64),
                })
            })
            .collect()
    }

    /// Категория видна на витрине
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map_or(false, |s| s.trim().eq_ignore_ascii_case(STATUS_SHOW))
    }
}

/// Тело запросов `POST /category/add` и `PATCH /category/edit/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub img: String,
    pub parent: String,
    pub children: Vec<String>,
    #[serde(rename = "productType")]
    pub product_type: String,
    pub description: String,
    pub status: String,
}

/// Сводка над списком категорий
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub total: usize,
    pub active: usize,
    pub total_products: usize,
    pub total_subcategories: usize,
}

impl CategoryStats {
    pub fn from_categories(categories: &[Category]) -> Self {
        categories.iter().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            if c.is_active() {
                acc.active += 1;
            }
            acc.total_products += c.product_count();
            acc.total_subcategories += c.children_count();
            acc
        })
    }

    /// Доля активных категорий в процентах
    pub fn active_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.active as f64 * 100.0 / self.total as f64
        }
    }
}

/// Сколько подкатегорий и товаров видно в свёрнутой карточке
pub const CHILDREN_PREVIEW: usize = 3;
pub const PRODUCTS_PREVIEW: usize = 5;

/// Вид списка категорий
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryViewMode {
    #[default]
    Table,
    Grid,
}

/// Первые `limit` элементов и число скрытых.
///
/// Развёрнутый список возвращается целиком.
pub fn preview<T>(items: &[T], limit: usize, expanded: bool) -> (&[T], usize) {
    if expanded || items.len() <= limit {
        (items, 0)
    } else {
        (&items[..limit], items.len() - limit)
    }
}

/// Краткие сведения о товаре для карточки категории
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPreview {
    pub title: String,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_category() {
        let json = r#"{
            "_id": "c1",
            "parent": "Phones",
            "description": "Mobile phones",
            "productType": "electronics",
            "status": "Show",
            "img": "https://cdn/p.jpg",
            "children": ["Android", "iOS"],
            "products": [{"_id": "p1"}, {"_id": "p2"}],
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.product_type.as_deref(), Some("electronics"));
        assert_eq!(category.product_count(), 2);
        assert!(category.is_active());
        assert!(category.created_at.is_some());
    }

    #[test]
    fn test_deserialize_category_list_with_nulls() {
        let json = r#"[
            {"_id": "c1", "parent": null, "children": null, "status": null, "products": null},
            {"_id": "c2", "parent": "Laptops"},
            {"parent": "Tablets", "children": ["Android"]}
        ]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].parent, "");
        assert_eq!(categories[0].children_count(), 0);
        assert_eq!(categories[0].product_count(), 0);
        assert!(!categories[0].is_active());
        assert_eq!(categories[1].parent, "Laptops");
        assert!(categories[2].id.is_empty());
    }

    #[test]
    fn test_stats() {
        let categories = vec![
            Category {
                status: Some("show".into()),
                children: vec!["a".into(), "b".into()],
                products: Some(vec![serde_json::Value::Null]),
                ..Category::default()
            },
            Category {
                status: Some("Hide".into()),
                children: vec!["c".into()],
                ..Category::default()
            },
        ];
        let stats = CategoryStats::from_categories(&categories);
        assert_eq!(
            stats,
            CategoryStats {
                total: 2,
                active: 1,
                total_products: 1,
                total_subcategories: 3
            }
        );
        assert_eq!(stats.active_percent(), 50.0);
        assert_eq!(CategoryStats::default().active_percent(), 0.0);
    }

    #[test]
    fn test_preview_collapsed_and_expanded() {
        let children = ["a", "b", "c", "d", "e"];
        let (shown, hidden) = preview(&children, CHILDREN_PREVIEW, false);
        assert_eq!(shown, &["a", "b", "c"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = preview(&children, CHILDREN_PREVIEW, true);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);

        let (shown, hidden) = preview(&children[..2], CHILDREN_PREVIEW, false);
        assert_eq!(shown, &["a", "b"]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_product_previews_skip_untitled() {
        let json = r#"{
            "_id": "c1",
            "parent": "Phones",
            "products": [
                {"_id": "p1", "title": "Pixel", "price": 499.5},
                {"_id": "p2"},
                {"_id": "p3", "title": " ", "price": 10},
                "p4",
                {"_id": "p5", "title": "iPhone", "price": null}
            ]
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.product_count(), 5);
        assert_eq!(
            category.product_previews(),
            vec![
                ProductPreview { title: "Pixel".into(), price: Some(499.5) },
                ProductPreview { title: "iPhone".into(), price: None },
            ]
        );
        assert_eq!(CategoryViewMode::default(), CategoryViewMode::Table);
    }
}
