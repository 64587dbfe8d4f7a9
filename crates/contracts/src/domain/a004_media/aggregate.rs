use serde::{Deserialize, Serialize};

/// Загруженное изображение. Удаление всегда по `public_id`, не по URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    #[serde(rename = "id", alias = "public_id")]
    pub public_id: String,
}

impl UploadedImage {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }

    /// Изображение, известное только по URL (старые записи без public_id)
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(url, String::new())
    }

    pub fn has_public_id(&self) -> bool {
        !self.public_id.trim().is_empty()
    }
}

/// Тело запроса `DELETE /cloudinary/img-delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteImageRequest {
    pub public_id: String,
}

impl From<&UploadedImage> for DeleteImageRequest {
    fn from(image: &UploadedImage) -> Self {
        Self {
            public_id: image.public_id.clone(),
        }
    }
}

/// Изображения, загруженные в открытом диалоге и всё ещё лежащие в черновике.
///
/// Их нужно удалить из хранилища, если диалог закрыт без сохранения.
/// Изображения, бывшие в записи до открытия диалога, сюда не попадают.
pub fn unsaved_uploads(session: &[UploadedImage], in_draft: &[UploadedImage]) -> Vec<UploadedImage> {
    session
        .iter()
        .filter(|image| image.has_public_id())
        .filter(|image| in_draft.iter().any(|d| d.public_id == image.public_id))
        .cloned()
        .collect()
}

/// Имя поля multipart для одиночной загрузки
pub const SINGLE_UPLOAD_FIELD: &str = "image";
/// Имя поля multipart для пакетной загрузки
pub const MULTIPLE_UPLOAD_FIELD: &str = "images";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SuccessEnvelope;

    #[test]
    fn test_single_upload_response() {
        let json = r#"{"success": true, "data": {"url": "https://cdn/x.jpg", "id": "shop/x"}}"#;
        let envelope: SuccessEnvelope<UploadedImage> = serde_json::from_str(json).unwrap();
        let image = envelope.into_result().unwrap();
        assert_eq!(image, UploadedImage::new("https://cdn/x.jpg", "shop/x"));
        assert!(image.has_public_id());
    }

    #[test]
    fn test_unsaved_uploads_skip_existing_and_removed() {
        let existing = UploadedImage::new("https://cdn/old.jpg", "shop/old");
        let kept = UploadedImage::new("https://cdn/a.jpg", "shop/a");
        let removed = UploadedImage::new("https://cdn/b.jpg", "shop/b");

        let session = vec![kept.clone(), removed];
        let in_draft = vec![existing, kept.clone()];
        assert_eq!(unsaved_uploads(&session, &in_draft), vec![kept]);
    }

    #[test]
    fn test_delete_request_uses_public_id() {
        let image = UploadedImage::new("https://cdn/x.jpg", "shop/x");
        let body = serde_json::to_string(&DeleteImageRequest::from(&image)).unwrap();
        assert_eq!(body, r#"{"public_id":"shop/x"}"#);
    }
}
