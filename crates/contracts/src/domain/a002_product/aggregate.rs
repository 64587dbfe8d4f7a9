use crate::domain::a003_brand::BrandRef;
use crate::domain::common::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("in-stock", "В наличии"),
    ("out-of-stock", "Нет в наличии"),
    ("discontinued", "Снят с продажи"),
];

pub const UNIT_OPTIONS: &[(&str, &str)] = &[
    ("piece", "Штука"),
    ("kg", "Килограмм"),
    ("g", "Грамм"),
    ("l", "Литр"),
    ("ml", "Миллилитр"),
    ("dozen", "Дюжина"),
    ("pair", "Пара"),
    ("set", "Набор"),
];

/// Родительские категории и их подкатегории для формы товара
pub const PARENT_OPTIONS: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "electronics",
        "Электроника",
        &[("smartphones", "Смартфоны"), ("laptops", "Ноутбуки"), ("accessories", "Аксессуары")],
    ),
    (
        "clothing",
        "Одежда",
        &[("mens", "Мужская"), ("womens", "Женская"), ("kids", "Детская")],
    ),
    (
        "home",
        "Дом и кухня",
        &[("furniture", "Мебель"), ("decor", "Декор"), ("appliances", "Техника")],
    ),
    (
        "books",
        "Книги",
        &[("fiction", "Художественная"), ("nonfiction", "Нехудожественная"), ("children", "Детская")],
    ),
];

/// Подкатегории выбранного родителя
pub fn subcategories_of(parent: &str) -> &'static [(&'static str, &'static str)] {
    PARENT_OPTIONS
        .iter()
        .find(|(value, _, _)| *value == parent)
        .map(|(_, _, children)| *children)
        .unwrap_or(&[])
}

/// Ссылка на категорию внутри товара
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "clrCode", default, deserialize_with = "null_as_default")]
    pub clr_code: String,
}

/// Цветовой вариант товара (элемент `imageURLs`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorVariantDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: Color,
    #[serde(default, deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDate {
    #[serde(rename = "startDate", default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl OfferDate {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Товар из `GET /product/all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(rename = "productType", default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub brand: Option<BrandRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(rename = "imageURLs", default, deserialize_with = "null_as_default")]
    pub image_urls: Vec<ColorVariantDto>,
    #[serde(rename = "offerDate", default)]
    pub offer_date: Option<OfferDate>,
    #[serde(rename = "additionalInformation", default, deserialize_with = "null_as_default")]
    pub additional_information: Vec<AdditionalInfo>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Тело запросов `POST /product/add` и `PATCH /product/edit-product/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub sku: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    pub unit: String,
    #[serde(rename = "productType")]
    pub product_type: String,
    pub status: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub featured: bool,
    pub parent: String,
    pub children: String,
    pub brand: BrandRef,
    pub category: CategoryRef,
    pub sizes: Vec<String>,
    pub tags: Vec<String>,
    pub img: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(rename = "imageURLs")]
    pub image_urls: Vec<ColorVariantDto>,
    #[serde(rename = "offerDate", skip_serializing_if = "Option::is_none")]
    pub offer_date: Option<OfferDate>,
    #[serde(rename = "additionalInformation")]
    pub additional_information: Vec<AdditionalInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_product() {
        let json = r##"{
            "_id": "p1",
            "title": "iPhone 15",
            "sku": "IP15",
            "price": 999,
            "category": {"name": "Phones", "id": "c1"},
            "brand": {"name": "Apple"},
            "status": "in-stock",
            "quantity": 7,
            "tags": ["apple", "phone"],
            "imageURLs": [{"color": {"name": "Black", "clrCode": "#000"}, "img": "https://cdn/b.jpg", "sizes": []}],
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-02-01T00:00:00.000Z"
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title.as_deref(), Some("iPhone 15"));
        assert_eq!(product.price, Some(999.0));
        assert_eq!(product.brand.map(|b| b.name), Some("Apple".to_string()));
        assert_eq!(product.image_urls[0].color.clr_code, "#000");
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_product_list_with_nulls() {
        let json = r##"[
            {"_id": "p1", "title": "Case", "tags": null, "sizes": null, "featured": null,
             "images": null, "category": {"name": null, "id": "c1"}, "brand": {"name": null},
             "imageURLs": [{"color": {"name": null, "clrCode": "#fff"}, "img": null, "sizes": null}],
             "additionalInformation": null, "price": null},
            {"_id": "p2", "title": "Cable"}
        ]"##;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        let p = &products[0];
        assert!(p.tags.is_empty());
        assert!(p.sizes.is_empty());
        assert!(!p.featured);
        assert_eq!(p.category.as_ref().map(|c| c.name.as_str()), Some(""));
        assert_eq!(p.category.as_ref().map(|c| c.id.as_str()), Some("c1"));
        assert!(p.brand.as_ref().is_some_and(BrandRef::is_empty));
        assert_eq!(p.image_urls[0].color.clr_code, "#fff");
        assert!(p.image_urls[0].img.is_empty());
        assert_eq!(p.price, None);
        assert_eq!(products[1].title.as_deref(), Some("Cable"));
    }

    #[test]
    fn test_subcategories_of() {
        assert_eq!(subcategories_of("electronics").len(), 3);
        assert!(subcategories_of("unknown").is_empty());
    }
}
