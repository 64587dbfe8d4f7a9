//! Поле изображения формы: загрузка начинается сразу при выборе файла

use crate::domain::a004_media::UploadedImage;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImageSlot {
    #[default]
    Empty,
    Uploading,
    Uploaded(UploadedImage),
    Failed(String),
}

impl ImageSlot {
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading)
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        match self {
            Self::Uploaded(image) => Some(image),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.image().map(|image| image.url.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Option<UploadedImage>> for ImageSlot {
    fn from(value: Option<UploadedImage>) -> Self {
        value.map(Self::Uploaded).unwrap_or_default()
    }
}
