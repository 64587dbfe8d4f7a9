//! Ошибки операций админки. Каждая ошибка относится к своей операции,
//! фатальных ошибок нет.

use super::form::ValidationErrors;
use super::table::{BulkOutcome, RowId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("{operation}: {message}")]
    Network { operation: String, message: String },

    #[error("Проверьте поля формы: {0}")]
    Validation(ValidationErrors),

    #[error("Ошибка загрузки изображения: {0}")]
    Upload(String),

    #[error("{}", partial_failure_message(.failed, .succeeded))]
    PartialBulkFailure {
        failed: Vec<(RowId, String)>,
        succeeded: usize,
    },

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    #[error("Выгрузка не выполнена: {0}")]
    Export(String),
}

impl AdminError {
    pub fn network(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Ошибка групповой операции; `None`, если всё прошло успешно
    pub fn from_bulk_outcome(outcome: &BulkOutcome) -> Option<Self> {
        if outcome.is_complete_success() {
            return None;
        }
        Some(Self::PartialBulkFailure {
            failed: outcome.failed.clone(),
            succeeded: outcome.succeeded.len(),
        })
    }

    /// Можно ли предложить пользователю повторить операцию
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Upload(_) | Self::Decode(_))
    }
}

fn partial_failure_message(failed: &[(RowId, String)], succeeded: &usize) -> String {
    let ids: Vec<String> = failed
        .iter()
        .map(|(id, reason)| format!("{} ({})", id, reason))
        .collect();
    format!(
        "Выполнено: {}, с ошибкой: {}: {}",
        succeeded,
        failed.len(),
        ids.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_names_failed_ids() {
        let err = AdminError::PartialBulkFailure {
            failed: vec![(RowId::from("abc"), "HTTP 500".into())],
            succeeded: 2,
        };
        let text = err.to_string();
        assert!(text.contains("abc"));
        assert!(text.contains("HTTP 500"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_bulk_outcome() {
        let mut outcome = BulkOutcome::new();
        outcome.record(RowId::from("a"), Ok(()));
        assert_eq!(AdminError::from_bulk_outcome(&outcome), None);

        outcome.record(RowId::from("b"), Err("HTTP 404".into()));
        outcome.record(RowId::from("c"), Ok(()));
        match AdminError::from_bulk_outcome(&outcome) {
            Some(AdminError::PartialBulkFailure { failed, succeeded }) => {
                assert_eq!(succeeded, 2);
                assert_eq!(failed, vec![(RowId::from("b"), "HTTP 404".to_string())]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_export_error_is_not_retryable() {
        let err = AdminError::Export("Нет данных для экспорта".into());
        assert_eq!(err.to_string(), "Выгрузка не выполнена: Нет данных для экспорта");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_network_display() {
        let err = AdminError::network("Загрузка категорий", "HTTP 502");
        assert_eq!(err.to_string(), "Загрузка категорий: HTTP 502");
        assert!(err.is_retryable());
    }
}
