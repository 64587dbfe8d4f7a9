use crate::shared::api_utils::{fetch_list, get_json};
use contracts::domain::a003_brand::Brand;
use contracts::domain::common::ResultEnvelope;
use contracts::shared::error::AdminError;

/// Активные бренды для выбора в форме товара
pub async fn fetch_active_brands() -> Result<Vec<Brand>, AdminError> {
    let envelope: ResultEnvelope<Vec<Brand>> =
        fetch_list(|| get_json("Загрузка брендов", "/brand/active")).await?;
    log::debug!("brands loaded: {}", envelope.result.len());
    Ok(envelope.result)
}
