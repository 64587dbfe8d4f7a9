//! Черновик формы добавления/редактирования категории

use super::aggregate::{Category, CategoryPayload, STATUS_SHOW};
use crate::domain::a004_media::UploadedImage;
use crate::shared::form::{FormDraft, ImageSlot, TagList, ValidationErrors};
use crate::shared::metadata::ValidationRules;

/// У диалога категории одна вкладка
pub const CATEGORY_TABS: &[&str] = &["basic"];

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub img: ImageSlot,
    pub parent: String,
    pub children: TagList,
    pub product_type: String,
    pub description: String,
    pub status: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            img: ImageSlot::Empty,
            parent: String::new(),
            children: TagList::new(),
            product_type: String::new(),
            description: String::new(),
            status: STATUS_SHOW.to_string(),
        }
    }
}

impl CategoryDraft {
    /// Черновик для диалога редактирования
    pub fn from_category(category: &Category) -> Self {
        let img = category
            .img
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(UploadedImage::from_url);

        Self {
            img: ImageSlot::from(img),
            parent: category.parent.clone(),
            children: TagList::from_values(&category.children),
            product_type: category.product_type.clone().unwrap_or_default(),
            description: category.description.clone().unwrap_or_default(),
            status: category
                .status
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| STATUS_SHOW.to_string()),
        }
    }
}

impl FormDraft for CategoryDraft {
    type Payload = CategoryPayload;

    fn validate(&self) -> Result<CategoryPayload, ValidationErrors> {
        let required = ValidationRules::required();
        let mut errors = ValidationErrors::new();

        errors.check("parent", required.validate_string(&self.parent, "Родительская категория"));
        errors.check("product_type", required.validate_string(&self.product_type, "Тип товара"));
        if self.img.is_uploading() {
            errors.add("img", "Дождитесь окончания загрузки изображения");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CategoryPayload {
            img: self.img.url().unwrap_or_default().to_string(),
            parent: self.parent.trim().to_string(),
            children: self.children.to_vec(),
            product_type: self.product_type.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AdminError;
    use crate::shared::form::FormWizard;

    #[test]
    fn test_empty_parent_blocks_submit() {
        let mut wizard: FormWizard<CategoryDraft> = FormWizard::new(CATEGORY_TABS);
        wizard.edit("product_type", |d| d.product_type = "electronics".into());
        let blocked = wizard.begin_submit();
        assert!(matches!(blocked, Err(AdminError::Validation(_))));
        assert!(wizard.errors.contains("parent"));
        assert!(!wizard.errors.contains("product_type"));
    }

    #[test]
    fn test_valid_payload() {
        let mut draft = CategoryDraft::default();
        draft.parent = " Phones ".into();
        draft.product_type = "electronics".into();
        draft.children.add_many("Android, iOS");
        draft.img = ImageSlot::Uploaded(UploadedImage::new("https://cdn/p.jpg", "shop/p"));

        let payload = draft.validate().unwrap();
        assert_eq!(payload.parent, "Phones");
        assert_eq!(payload.children, vec!["Android".to_string(), "iOS".to_string()]);
        assert_eq!(payload.img, "https://cdn/p.jpg");
        assert_eq!(payload.status, "Show");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productType"], "electronics");
    }

    #[test]
    fn test_uploading_image_blocks_submit() {
        let mut draft = CategoryDraft::default();
        draft.parent = "Phones".into();
        draft.product_type = "electronics".into();
        draft.img = ImageSlot::Uploading;
        assert!(draft.validate().unwrap_err().contains("img"));
    }

    #[test]
    fn test_from_category() {
        let category = Category {
            id: "c1".into(),
            parent: "Phones".into(),
            children: vec!["Android".into()],
            img: Some("https://cdn/p.jpg".into()),
            status: None,
            ..Category::default()
        };
        let draft = CategoryDraft::from_category(&category);
        assert_eq!(draft.img.url(), Some("https://cdn/p.jpg"));
        assert_eq!(draft.children.len(), 1);
        assert_eq!(draft.status, "Show");
    }
}
