//! Черновик формы товара: пять вкладок, цветовые варианты,
//! дополнительная информация и период акции

use super::aggregate::{
    AdditionalInfo, CategoryRef, Color, ColorVariantDto, OfferDate, Product, ProductPayload,
};
use crate::domain::a003_brand::BrandRef;
use crate::domain::a004_media::UploadedImage;
use crate::shared::form::{FormDraft, ImageSlot, TagList, ValidationErrors};
use crate::shared::metadata::ValidationRules;
use chrono::{DateTime, Utc};

pub const PRODUCT_TABS: &[&str] = &["basic", "images", "variants", "inventory", "additional"];

pub const TAB_LABELS: &[(&str, &str)] = &[
    ("basic", "Основное"),
    ("images", "Изображения"),
    ("variants", "Варианты"),
    ("inventory", "Склад"),
    ("additional", "Дополнительно"),
];

pub const DEFAULT_STATUS: &str = "in-stock";
pub const DEFAULT_COLOR_CODE: &str = "#000000";

const PRICE: ValidationRules = ValidationRules::required_non_negative();
const DISCOUNT: ValidationRules = ValidationRules::non_negative();
const QUANTITY: ValidationRules = ValidationRules::non_negative().integer();

/// Slug из названия: нижний регистр, пробелы -> `-`, прочие символы кроме `[A-Za-z0-9_-]` удаляются
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

/// Цветовой вариант в форме
#[derive(Debug, Clone, PartialEq)]
pub struct ColorVariant {
    pub name: String,
    pub clr_code: String,
    pub images: Vec<UploadedImage>,
    pub sizes: TagList,
}

impl Default for ColorVariant {
    fn default() -> Self {
        Self {
            name: String::new(),
            clr_code: DEFAULT_COLOR_CODE.to_string(),
            images: Vec::new(),
            sizes: TagList::new(),
        }
    }
}

impl ColorVariant {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Укажите название цвета".into());
        }
        if self.clr_code.trim().is_empty() {
            return Err("Укажите код цвета".into());
        }
        if self.images.is_empty() {
            return Err("Добавьте хотя бы одно изображение варианта".into());
        }
        if self.sizes.is_empty() {
            return Err("Добавьте хотя бы один размер варианта".into());
        }
        Ok(())
    }

    fn to_dto(&self) -> ColorVariantDto {
        let urls: Vec<String> = self.images.iter().map(|i| i.url.clone()).collect();
        ColorVariantDto {
            color: Color {
                name: self.name.trim().to_string(),
                clr_code: self.clr_code.trim().to_string(),
            },
            img: urls.first().cloned().unwrap_or_default(),
            images: urls,
            sizes: self.sizes.to_vec(),
        }
    }

    fn from_dto(dto: &ColorVariantDto) -> Self {
        let mut urls: Vec<&str> = dto.images.iter().map(String::as_str).collect();
        if urls.is_empty() && !dto.img.is_empty() {
            urls.push(&dto.img);
        }
        Self {
            name: dto.color.name.clone(),
            clr_code: dto.color.clr_code.clone(),
            images: urls.into_iter().map(UploadedImage::from_url).collect(),
            sizes: TagList::from_values(&dto.sizes),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    // basic
    pub title: String,
    pub sku: String,
    pub slug: String,
    /// Slug правили руками, больше не пересчитываем из названия
    pub slug_locked: bool,
    pub description: String,
    pub price: String,
    pub discount: String,
    pub product_type: String,
    pub parent: String,
    pub children: String,
    pub brand: BrandRef,
    pub category: CategoryRef,
    pub tags: TagList,
    // images
    pub main_image: ImageSlot,
    pub images: Vec<UploadedImage>,
    // variants
    pub color_variants: Vec<ColorVariant>,
    pub new_variant: ColorVariant,
    // inventory
    pub quantity: String,
    pub unit: String,
    pub status: String,
    pub sizes: TagList,
    // additional
    pub video_id: String,
    pub featured: bool,
    pub offer_start: Option<DateTime<Utc>>,
    pub offer_end: Option<DateTime<Utc>>,
    pub additional_info: Vec<AdditionalInfo>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            sku: String::new(),
            slug: String::new(),
            slug_locked: false,
            description: String::new(),
            price: String::new(),
            discount: String::new(),
            product_type: String::new(),
            parent: String::new(),
            children: String::new(),
            brand: BrandRef::default(),
            category: CategoryRef::default(),
            tags: TagList::new(),
            main_image: ImageSlot::Empty,
            images: Vec::new(),
            color_variants: Vec::new(),
            new_variant: ColorVariant::default(),
            quantity: String::new(),
            unit: String::new(),
            status: DEFAULT_STATUS.to_string(),
            sizes: TagList::new(),
            video_id: String::new(),
            featured: false,
            offer_start: None,
            offer_end: None,
            additional_info: Vec::new(),
        }
    }
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Черновик для диалога редактирования
    pub fn from_product(product: &Product) -> Self {
        let offer = product.offer_date.clone().unwrap_or_default();
        let title = product.title.clone().unwrap_or_default();
        let slug = product.slug.clone().unwrap_or_else(|| slugify(&title));
        Self {
            slug_locked: slug != slugify(&title),
            title,
            slug,
            sku: product.sku.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
            discount: product.discount.map(|d| d.to_string()).unwrap_or_default(),
            product_type: product.product_type.clone().unwrap_or_default(),
            parent: product.parent.clone().unwrap_or_default(),
            children: product.children.clone().unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            tags: TagList::from_values(&product.tags),
            main_image: ImageSlot::from(
                product
                    .img
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                    .map(UploadedImage::from_url),
            ),
            images: product.images.iter().map(UploadedImage::from_url).collect(),
            color_variants: product.image_urls.iter().map(ColorVariant::from_dto).collect(),
            new_variant: ColorVariant::default(),
            quantity: product
                .quantity
                .map(|q| (q.round() as i64).to_string())
                .unwrap_or_default(),
            unit: product.unit.clone().unwrap_or_default(),
            status: product
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            sizes: TagList::from_values(&product.sizes),
            video_id: product.video_id.clone().unwrap_or_default(),
            featured: product.featured,
            offer_start: offer.start_date,
            offer_end: offer.end_date,
            additional_info: product.additional_information.clone(),
        }
    }

    /// Название товара; slug пересчитывается, пока его не правили вручную
    pub fn set_title(&mut self, title: String) {
        if !self.slug_locked {
            self.slug = slugify(&title);
        }
        self.title = title;
    }

    pub fn set_slug(&mut self, slug: String) {
        self.slug_locked = !slug.trim().is_empty();
        if self.slug_locked {
            self.slug = slug;
        } else {
            self.slug = slugify(&self.title);
        }
    }

    /// Смена родителя сбрасывает подкатегорию
    pub fn set_parent(&mut self, parent: String) {
        if parent != self.parent {
            self.children.clear();
        }
        self.parent = parent;
    }

    /// Переносит заполненный вариант в список
    pub fn add_color_variant(&mut self) -> Result<(), String> {
        self.new_variant.validate()?;
        let variant = std::mem::take(&mut self.new_variant);
        self.color_variants.push(variant);
        Ok(())
    }

    pub fn remove_color_variant(&mut self, index: usize) -> Option<ColorVariant> {
        if index < self.color_variants.len() {
            Some(self.color_variants.remove(index))
        } else {
            None
        }
    }

    pub fn add_info_row(&mut self) {
        self.additional_info.push(AdditionalInfo::default());
    }

    pub fn update_info(&mut self, index: usize, key: Option<String>, value: Option<String>) {
        if let Some(row) = self.additional_info.get_mut(index) {
            if let Some(key) = key {
                row.key = key;
            }
            if let Some(value) = value {
                row.value = value;
            }
        }
    }

    pub fn remove_info_row(&mut self, index: usize) {
        if index < self.additional_info.len() {
            self.additional_info.remove(index);
        }
    }

    /// Удаляет дополнительное изображение, возвращает его для удаления на сервере
    pub fn remove_image(&mut self, index: usize) -> Option<UploadedImage> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Убирает изображение из ещё не добавленного варианта
    pub fn remove_variant_image(&mut self, index: usize) -> Option<UploadedImage> {
        let images = &mut self.new_variant.images;
        (index < images.len()).then(|| images.remove(index))
    }

    /// Все изображения черновика, которые можно удалить из хранилища
    pub fn uploaded_images(&self) -> Vec<UploadedImage> {
        let mut result: Vec<UploadedImage> = Vec::new();
        if let Some(image) = self.main_image.image() {
            result.push(image.clone());
        }
        result.extend(self.images.iter().cloned());
        for variant in self.color_variants.iter().chain(std::iter::once(&self.new_variant)) {
            result.extend(variant.images.iter().cloned());
        }
        result.retain(UploadedImage::has_public_id);
        result
    }
}

impl FormDraft for ProductDraft {
    type Payload = ProductPayload;

    fn validate(&self) -> Result<ProductPayload, ValidationErrors> {
        let required = ValidationRules::required();
        let mut errors = ValidationErrors::new();

        errors.check("title", required.validate_string(&self.title, "Название"));
        let price = match PRICE.parse_number(&self.price, "Цена") {
            Ok(value) => value,
            Err(message) => {
                errors.add("price", message);
                None
            }
        };
        let discount = match DISCOUNT.parse_number(&self.discount, "Скидка") {
            Ok(value) => value,
            Err(message) => {
                errors.add("discount", message);
                None
            }
        };
        let quantity = match QUANTITY.parse_number(&self.quantity, "Количество") {
            Ok(value) => value,
            Err(message) => {
                errors.add("quantity", message);
                None
            }
        };
        errors.check("unit", required.validate_string(&self.unit, "Единица измерения"));

        match &self.main_image {
            ImageSlot::Uploaded(_) => {}
            ImageSlot::Uploading => errors.add("main_image", "Дождитесь окончания загрузки"),
            _ => errors.add("main_image", "Основное изображение обязательно"),
        }

        errors.check("parent", required.validate_string(&self.parent, "Родительская категория"));
        errors.check("children", required.validate_string(&self.children, "Подкатегория"));
        if self.brand.is_empty() {
            errors.add("brand", "Бренд обязателен");
        }
        errors.check("description", required.validate_string(&self.description, "Описание"));
        errors.check("product_type", required.validate_string(&self.product_type, "Тип товара"));

        if let (Some(start), Some(end)) = (self.offer_start, self.offer_end) {
            if end < start {
                errors.add("offer_end", "Окончание акции раньше начала");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let offer_date = OfferDate {
            start_date: self.offer_start,
            end_date: self.offer_end,
        };

        Ok(ProductPayload {
            title: self.title.trim().to_string(),
            sku: self.sku.trim().to_string(),
            slug: self.slug.clone(),
            description: self.description.trim().to_string(),
            price: price.unwrap_or_default(),
            discount,
            quantity: quantity.map(|q| q as i64),
            unit: self.unit.clone(),
            product_type: self.product_type.trim().to_lowercase(),
            status: self.status.clone(),
            video_id: self.video_id.trim().to_string(),
            featured: self.featured,
            parent: self.parent.clone(),
            children: self.children.clone(),
            brand: self.brand.clone(),
            category: self.category.clone(),
            sizes: self.sizes.to_vec(),
            tags: self.tags.to_vec(),
            img: self.main_image.url().unwrap_or_default().to_string(),
            images: self.images.iter().map(|i| i.url.clone()).collect(),
            image_urls: self.color_variants.iter().map(ColorVariant::to_dto).collect(),
            offer_date: (!offer_date.is_empty()).then_some(offer_date),
            additional_information: self
                .additional_info
                .iter()
                .filter(|info| !info.key.trim().is_empty())
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_draft() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.set_title("Galaxy S24 Ultra!".into());
        draft.price = "1199,99".into();
        draft.quantity = "5".into();
        draft.unit = "piece".into();
        draft.main_image = ImageSlot::Uploaded(UploadedImage::new("https://cdn/main.jpg", "shop/main"));
        draft.parent = "electronics".into();
        draft.children = "smartphones".into();
        draft.brand = BrandRef {
            name: "Samsung".into(),
            id: "b1".into(),
        };
        draft.description = "Flagship".into();
        draft.product_type = "Electronics".into();
        draft
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Galaxy S24  Ultra!"), "galaxy-s24-ultra");
        assert_eq!(slugify("snake_case-ok"), "snake_case-ok");
        assert_eq!(slugify("Чехол X"), "-x");
    }

    #[test]
    fn test_slug_follows_title_until_locked() {
        let mut draft = ProductDraft::new();
        draft.set_title("Red Shirt".into());
        assert_eq!(draft.slug, "red-shirt");
        draft.set_slug("custom".into());
        draft.set_title("Blue Shirt".into());
        assert_eq!(draft.slug, "custom");
        draft.set_slug(String::new());
        assert_eq!(draft.slug, "blue-shirt");
    }

    #[test]
    fn test_empty_draft_lists_all_required_fields() {
        let errors = ProductDraft::new().validate().unwrap_err();
        for field in [
            "title",
            "price",
            "unit",
            "main_image",
            "parent",
            "children",
            "brand",
            "description",
            "product_type",
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert!(!errors.contains("quantity"));
    }

    #[test]
    fn test_valid_payload() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.slug, "galaxy-s24-ultra");
        assert_eq!(payload.price, 1199.99);
        assert_eq!(payload.quantity, Some(5));
        assert_eq!(payload.product_type, "electronics");
        assert_eq!(payload.status, "in-stock");
        assert!(payload.offer_date.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productType"], "electronics");
        assert!(json.get("discount").is_none());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        let mut draft = valid_draft();
        draft.price = "-5".into();
        draft.quantity = "2.5".into();
        draft.discount = "abc".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains("price"));
        assert!(errors.contains("quantity"));
        assert!(errors.contains("discount"));
    }

    #[test]
    fn test_offer_end_before_start() {
        let mut draft = valid_draft();
        draft.offer_start = Some(Utc.with_ymd_and_hms(2025, 4, 23, 0, 0, 0).unwrap());
        draft.offer_end = Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
        assert!(draft.validate().unwrap_err().contains("offer_end"));

        draft.offer_end = None;
        let payload = draft.validate().unwrap();
        assert!(payload.offer_date.is_some());
    }

    #[test]
    fn test_color_variant_requires_image_and_size() {
        let mut draft = valid_draft();
        draft.new_variant.name = "Black".into();
        assert!(draft.add_color_variant().is_err());

        draft
            .new_variant
            .images
            .push(UploadedImage::new("https://cdn/black.jpg", "shop/black"));
        assert!(draft.add_color_variant().is_err());

        draft.new_variant.sizes.add("M");
        assert!(draft.add_color_variant().is_ok());
        assert_eq!(draft.color_variants.len(), 1);
        assert_eq!(draft.new_variant, ColorVariant::default());

        let payload = draft.validate().unwrap();
        assert_eq!(payload.image_urls[0].img, "https://cdn/black.jpg");
        assert_eq!(payload.image_urls[0].color.clr_code, "#000000");
    }

    #[test]
    fn test_additional_info_rows() {
        let mut draft = valid_draft();
        draft.add_info_row();
        draft.add_info_row();
        draft.update_info(0, Some("Material".into()), Some("Glass".into()));
        draft.update_info(5, Some("ignored".into()), None);
        let payload = draft.validate().unwrap();
        assert_eq!(payload.additional_information.len(), 1);
        assert_eq!(payload.additional_information[0].value, "Glass");

        draft.remove_info_row(0);
        assert_eq!(draft.additional_info.len(), 1);
    }

    #[test]
    fn test_set_parent_resets_children() {
        let mut draft = valid_draft();
        draft.set_parent("electronics".into());
        assert_eq!(draft.children, "smartphones");
        draft.set_parent("books".into());
        assert!(draft.children.is_empty());
    }

    #[test]
    fn test_from_product_roundtrip_to_edit() {
        let product = Product {
            id: "p1".into(),
            title: Some("Red Shirt".into()),
            price: Some(25.0),
            quantity: Some(4.0),
            img: Some("https://cdn/r.jpg".into()),
            ..Product::default()
        };
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.slug, "red-shirt");
        assert!(!draft.slug_locked);
        assert_eq!(draft.price, "25");
        assert_eq!(draft.quantity, "4");
        assert_eq!(draft.status, DEFAULT_STATUS);
        assert_eq!(draft.main_image.url(), Some("https://cdn/r.jpg"));
    }

    #[test]
    fn test_remove_variant_image_leaves_failed_phase() {
        use crate::shared::form::{FormPhase, FormWizard};

        let mut wizard: FormWizard<ProductDraft> = FormWizard::new(PRODUCT_TABS);
        wizard.draft.new_variant.images = vec![
            UploadedImage::new("https://cdn/a.jpg", "shop/a"),
            UploadedImage::new("https://cdn/b.jpg", "shop/b"),
        ];
        wizard.failed("HTTP 500");

        let mut removed = None;
        wizard.edit("color_variants", |d| removed = d.remove_variant_image(0));
        assert_eq!(removed.map(|i| i.public_id), Some("shop/a".to_string()));
        assert_eq!(wizard.phase, FormPhase::Editing);
        assert_eq!(wizard.draft.new_variant.images.len(), 1);

        let mut out_of_range = None;
        wizard.edit("color_variants", |d| out_of_range = d.remove_variant_image(5));
        assert!(out_of_range.is_none());
    }

    #[test]
    fn test_uploaded_images_skip_url_only() {
        let mut draft = valid_draft();
        draft.images.push(UploadedImage::from_url("https://cdn/old.jpg"));
        draft.images.push(UploadedImage::new("https://cdn/new.jpg", "shop/new"));
        let ids: Vec<String> = draft.uploaded_images().into_iter().map(|i| i.public_id).collect();
        assert_eq!(ids, vec!["shop/main".to_string(), "shop/new".to_string()]);
    }
}
