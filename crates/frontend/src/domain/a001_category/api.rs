//! REST-клиент категорий

use crate::shared::api_utils::{api_path, delete, fetch_list, get_json, send_json};
use contracts::domain::a001_category::{Category, CategoryPayload};
use contracts::domain::common::ResultEnvelope;
use contracts::shared::error::AdminError;
use gloo_net::http::Method;

/// `GET /category/all`, с повтором при сетевой ошибке
pub async fn fetch_categories() -> Result<Vec<Category>, AdminError> {
    let envelope: ResultEnvelope<Vec<Category>> =
        fetch_list(|| get_json("Загрузка категорий", "/category/all")).await?;
    log::info!("categories loaded: {}", envelope.result.len());
    Ok(envelope.result)
}

pub async fn fetch_category(id: &str) -> Result<Category, AdminError> {
    let envelope: ResultEnvelope<Category> =
        get_json("Загрузка категории", &api_path("/category/get", id)).await?;
    Ok(envelope.result)
}

pub async fn add_category(payload: &CategoryPayload) -> Result<(), AdminError> {
    send_json(Method::POST, "Добавление категории", "/category/add", payload).await
}

pub async fn edit_category(id: &str, payload: &CategoryPayload) -> Result<(), AdminError> {
    send_json(
        Method::PATCH,
        "Изменение категории",
        &api_path("/category/edit", id),
        payload,
    )
    .await
}

pub async fn delete_category(id: &str) -> Result<(), AdminError> {
    delete("Удаление категории", &api_path("/category/delete", id)).await
}
