//! Конверты ответов REST API.
//!
//! Бэкенд отвечает в трёх формах: `{ result }` (категории, бренды),
//! `{ data }` (товары) и `{ success, data, message }` (загрузка изображений).

use serde::{Deserialize, Deserializer, Serialize};

/// `null` в ответе бэкенда читается как значение по умолчанию.
///
/// `#[serde(default)]` закрывает только отсутствующий ключ; явный `null`
/// в одной записи иначе ломает разбор всего списка.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> SuccessEnvelope<T> {
    /// `success: false` или пустой `data` считаются ошибкой
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self
                .message
                .unwrap_or_else(|| "Сервер не вернул данные".to_string())),
        }
    }
}

/// Ответ мутаций: содержимое не используется, кроме сообщения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let ok: SuccessEnvelope<String> =
            serde_json::from_str(r#"{"success": true, "data": "x"}"#).unwrap();
        assert_eq!(ok.into_result(), Ok("x".to_string()));

        let failed: SuccessEnvelope<String> =
            serde_json::from_str(r#"{"success": false, "message": "too large"}"#).unwrap();
        assert_eq!(failed.into_result(), Err("too large".to_string()));
    }

    #[test]
    fn test_result_and_data_envelopes() {
        let r: ResultEnvelope<Vec<u32>> = serde_json::from_str(r#"{"result": [1, 2]}"#).unwrap();
        assert_eq!(r.result, vec![1, 2]);
        let d: DataEnvelope<Vec<u32>> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(d.data.is_empty());
    }
}
