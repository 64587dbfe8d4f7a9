//! REST-клиент товаров

use crate::shared::api_utils::{api_path, delete, fetch_list, get_json, send_json};
use contracts::domain::a002_product::{Product, ProductPayload};
use contracts::domain::common::DataEnvelope;
use contracts::shared::error::AdminError;
use gloo_net::http::Method;

/// `GET /product/all`, с повтором при сетевой ошибке
pub async fn fetch_products() -> Result<Vec<Product>, AdminError> {
    let envelope: DataEnvelope<Vec<Product>> =
        fetch_list(|| get_json("Загрузка товаров", "/product/all")).await?;
    log::info!("products loaded: {}", envelope.data.len());
    Ok(envelope.data)
}

pub async fn add_product(payload: &ProductPayload) -> Result<(), AdminError> {
    send_json(Method::POST, "Добавление товара", "/product/add", payload).await
}

pub async fn edit_product(id: &str, payload: &ProductPayload) -> Result<(), AdminError> {
    send_json(
        Method::PATCH,
        "Изменение товара",
        &api_path("/product/edit-product", id),
        payload,
    )
    .await
}

pub async fn delete_product(id: &str) -> Result<(), AdminError> {
    delete("Удаление товара", &api_path("/product", id)).await
}
