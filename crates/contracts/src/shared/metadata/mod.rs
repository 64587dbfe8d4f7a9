//! Metadata for table schemas and form field validation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a002_product::PRODUCT_SCHEMA;
//!
//! for column in PRODUCT_SCHEMA.list_columns() {
//!     println!("{}: {}", column.field, column.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{FieldKind, FilterWidget};
pub use types::{ColumnMeta, TableSchema};
pub use validation::ValidationRules;
