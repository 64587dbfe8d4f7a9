//! Общие типы для сущностей API

pub mod api_response;
pub mod table_entity;

// Re-exports
pub use api_response::{
    null_as_default, DataEnvelope, MutationResponse, ResultEnvelope, SuccessEnvelope,
};
pub use table_entity::{normalize_all, NormalizeWarning, TableEntity};
