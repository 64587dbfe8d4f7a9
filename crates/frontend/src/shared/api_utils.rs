//! API utilities for frontend-backend communication
//!
//! Все функции возвращают `Result<T, AdminError>`: сетевые ошибки и HTTP-статусы
//! становятся `AdminError::Network`, нераспознанный ответ - `AdminError::Decode`.

use crate::shared::config::load_config;
use contracts::domain::common::MutationResponse;
use contracts::shared::error::AdminError;
use contracts::shared::table::{BulkOutcome, RowId};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// Get the base URL for API requests
///
/// Берётся из настроек (`api_base`), иначе строится из адреса страницы
/// с портом 7000: "http://localhost:7000/api".
pub fn api_base() -> String {
    if let Some(base) = load_config().api_base {
        return base;
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:7000/api", protocol, hostname)
}

/// Build a full API URL from a path like "/category/all"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Путь с закодированным идентификатором: `/category/get/{id}`
pub fn api_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

/// GET с разбором JSON
pub async fn get_json<T: DeserializeOwned>(operation: &str, path: &str) -> Result<T, AdminError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| AdminError::network(operation, e.to_string()))?;
    read_json(operation, response).await
}

/// POST / PATCH с JSON телом. Тело ответа проверяется только на `success: false`.
pub async fn send_json<B: Serialize>(
    method: Method,
    operation: &str,
    path: &str,
    body: &B,
) -> Result<(), AdminError> {
    let response = RequestBuilder::new(&api_url(path))
        .method(method)
        .json(body)
        .map_err(|e| AdminError::network(operation, e.to_string()))?
        .send()
        .await
        .map_err(|e| AdminError::network(operation, e.to_string()))?;
    check_mutation(operation, response).await
}

/// DELETE без тела
pub async fn delete(operation: &str, path: &str) -> Result<(), AdminError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| AdminError::network(operation, e.to_string()))?;
    check_mutation(operation, response).await
}

/// Разбор JSON ответа; не-2xx статус становится сетевой ошибкой
pub async fn read_json<T: DeserializeOwned>(
    operation: &str,
    response: Response,
) -> Result<T, AdminError> {
    let text = read_ok_text(operation, &response).await?;
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("{}: cannot decode response: {}", operation, e);
        AdminError::decode(format!("{}: {}", operation, e))
    })
}

async fn check_mutation(operation: &str, response: Response) -> Result<(), AdminError> {
    let text = read_ok_text(operation, &response).await?;
    // тело ответа у мутаций разное; интересует только явный отказ
    if let Ok(MutationResponse {
        success: Some(false),
        message,
    }) = serde_json::from_str::<MutationResponse>(&text)
    {
        return Err(AdminError::network(
            operation,
            message.unwrap_or_else(|| "сервер отклонил запрос".to_string()),
        ));
    }
    Ok(())
}

async fn read_ok_text(operation: &str, response: &Response) -> Result<String, AdminError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !response.ok() {
        let message = serde_json::from_str::<MutationResponse>(&text)
            .ok()
            .and_then(|r| r.message)
            .map(|m| format!("HTTP {}: {}", status, m))
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(AdminError::network(operation, message));
    }
    Ok(text)
}

/// Повтор загрузки списка при сетевой ошибке.
///
/// Делает не более `retries` повторов с паузой `delay_ms`; ошибки разбора
/// ответа не повторяются. Мутации через этот helper не вызываются.
pub async fn with_retry<T, F, Fut>(retries: u32, delay_ms: u32, request: F) -> Result<T, AdminError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, AdminError>>,
{
    let mut attempt = 0;
    loop {
        match request().await {
            Ok(value) => return Ok(value),
            Err(err @ AdminError::Network { .. }) if attempt < retries => {
                attempt += 1;
                log::warn!("{}; retry {}/{}", err, attempt, retries);
                TimeoutFuture::new(delay_ms).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Загрузка списка с повторами из настроек
pub async fn fetch_list<T, F, Fut>(request: F) -> Result<T, AdminError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, AdminError>>,
{
    let config = load_config();
    with_retry(config.list_fetch_retries, config.retry_delay_ms, request).await
}

/// Групповая операция: запросы по одному, результат по каждой строке.
/// Ошибка одной строки не останавливает остальные.
pub async fn run_bulk<F, Fut>(ids: Vec<RowId>, action: F) -> BulkOutcome
where
    F: Fn(RowId) -> Fut,
    Fut: Future<Output = Result<(), AdminError>>,
{
    let mut outcome = BulkOutcome::new();
    for id in ids {
        let result = action(id.clone()).await.map_err(|e| e.to_string());
        outcome.record(id, result);
    }
    log::info!(
        "bulk operation: {} succeeded, {} failed",
        outcome.succeeded.len(),
        outcome.failed.len()
    );
    outcome
}
