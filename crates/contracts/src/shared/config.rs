//! Настройки админки. Все поля необязательны, значения по умолчанию
//! совпадают с поведением интерфейса без настроек.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Базовый адрес REST API; `None` - вычисляется из адреса страницы
    pub api_base: Option<String>,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Через сколько закрывается диалог после успешного сохранения
    pub success_close_delay_ms: u32,
    /// Сколько раз повторять загрузку списка при сетевой ошибке
    pub list_fetch_retries: u32,
    pub retry_delay_ms: u32,
    pub search_debounce_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            default_page_size: 10,
            page_size_options: vec![10, 20, 50],
            success_close_delay_ms: 2000,
            list_fetch_retries: 1,
            retry_delay_ms: 500,
            search_debounce_ms: 300,
        }
    }
}

impl AdminConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Не удалось разобрать настройки админки")?;
        Ok(config.validated())
    }

    /// Нормализует нулевые и пустые значения
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        self.api_base = self
            .api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty());

        self.page_size_options.retain(|size| *size > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.page_size_options.is_empty() {
            self.page_size_options = defaults.page_size_options;
        }

        if self.default_page_size == 0 {
            self.default_page_size = defaults.default_page_size;
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
            self.page_size_options.sort_unstable();
        }

        if self.retry_delay_ms == 0 {
            self.retry_delay_ms = defaults.retry_delay_ms;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AdminConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AdminConfig::default());
    }

    #[test]
    fn test_validated_normalizes_values() {
        let config = AdminConfig::from_json_str(
            r#"{"api_base": " http://localhost:7000/api/ ", "default_page_size": 25, "page_size_options": [50, 0, 10, 10]}"#,
        )
        .unwrap();
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:7000/api"));
        assert_eq!(config.page_size_options, vec![10, 25, 50]);
        assert_eq!(config.success_close_delay_ms, 2000);
    }

    #[test]
    fn test_blank_api_base_is_none() {
        let config = AdminConfig {
            api_base: Some("  ".into()),
            default_page_size: 0,
            ..AdminConfig::default()
        }
        .validated();
        assert_eq!(config.api_base, None);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(AdminConfig::from_json_str("not json").is_err());
    }
}
