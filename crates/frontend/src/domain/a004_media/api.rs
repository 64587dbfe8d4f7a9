//! Загрузка и удаление изображений (cloudinary через backend)
//!
//! Изображение загружается сразу при выборе файла. Удаляется всегда по
//! `public_id`, а не по URL.

use crate::shared::api_utils::{api_url, read_json};
use contracts::domain::a004_media::{
    DeleteImageRequest, UploadedImage, MULTIPLE_UPLOAD_FIELD, SINGLE_UPLOAD_FIELD,
};
use contracts::domain::common::{MutationResponse, SuccessEnvelope};
use contracts::shared::error::AdminError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

const UPLOAD_SINGLE_PATH: &str = "/cloudinary/add-img";
const UPLOAD_MULTIPLE_PATH: &str = "/cloudinary/add-multiple-img";
const DELETE_PATH: &str = "/cloudinary/img-delete";

fn upload_error(e: impl std::fmt::Debug) -> AdminError {
    AdminError::Upload(format!("{e:?}"))
}

async fn post_form<T: DeserializeOwned>(path: &str, form_data: FormData) -> Result<T, AdminError> {
    let response = Request::post(&api_url(path))
        .body(form_data)
        .map_err(|e| AdminError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| AdminError::Upload(e.to_string()))?;

    let envelope: SuccessEnvelope<T> = read_json("Загрузка изображения", response)
        .await
        .map_err(|e| match e {
            AdminError::Network { message, .. } => AdminError::Upload(message),
            other => other,
        })?;
    envelope.into_result().map_err(AdminError::Upload)
}

/// Загрузить одно изображение (поле `image`)
pub async fn upload_image(file: File) -> Result<UploadedImage, AdminError> {
    let form_data = FormData::new().map_err(upload_error)?;
    form_data
        .append_with_blob(SINGLE_UPLOAD_FIELD, &file)
        .map_err(upload_error)?;

    let image: UploadedImage = post_form(UPLOAD_SINGLE_PATH, form_data).await?;
    log::info!("image uploaded: {} ({})", image.url, image.public_id);
    Ok(image)
}

/// Загрузить несколько изображений одним запросом (поле `images`)
pub async fn upload_images(files: Vec<File>) -> Result<Vec<UploadedImage>, AdminError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let form_data = FormData::new().map_err(upload_error)?;
    for file in &files {
        form_data
            .append_with_blob(MULTIPLE_UPLOAD_FIELD, file)
            .map_err(upload_error)?;
    }

    let images: Vec<UploadedImage> = post_form(UPLOAD_MULTIPLE_PATH, form_data).await?;
    log::info!("{} images uploaded", images.len());
    Ok(images)
}

/// Удалить изображение из хранилища.
///
/// Изображения без `public_id` (пришли с сервера только URL) пропускаются.
pub async fn delete_image(image: &UploadedImage) -> Result<(), AdminError> {
    if !image.has_public_id() {
        log::debug!("skip delete for image without public_id: {}", image.url);
        return Ok(());
    }

    let operation = "Удаление изображения";
    let response = Request::delete(&api_url(DELETE_PATH))
        .json(&DeleteImageRequest::from(image))
        .map_err(|e| AdminError::network(operation, e.to_string()))?
        .send()
        .await
        .map_err(|e| AdminError::network(operation, e.to_string()))?;

    let status = response.status();
    let body: MutationResponse = response.json().await.unwrap_or_default();
    if !response.ok() || body.success == Some(false) {
        let message = body.message.unwrap_or_else(|| format!("HTTP {}", status));
        return Err(AdminError::Upload(message));
    }

    log::info!("image deleted: {}", image.public_id);
    Ok(())
}

/// Удаление без ожидания результата (очистка при отмене формы)
pub fn discard_images(images: Vec<UploadedImage>) {
    if images.is_empty() {
        return;
    }
    leptos::task::spawn_local(async move {
        for image in images {
            if let Err(e) = delete_image(&image).await {
                log::warn!("cannot discard image {}: {}", image.public_id, e);
            }
        }
    });
}
