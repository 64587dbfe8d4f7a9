pub mod aggregate;
pub mod form;
pub mod row;

pub use aggregate::{
    subcategories_of, AdditionalInfo, CategoryRef, Product, ProductPayload, PARENT_OPTIONS,
    STATUS_OPTIONS, UNIT_OPTIONS,
};
pub use form::{slugify, ColorVariant, ProductDraft, PRODUCT_TABS, TAB_LABELS};
pub use row::PRODUCT_SCHEMA;
