pub mod aggregate;
pub mod form;
pub mod row;

pub use aggregate::{
    preview, Category, CategoryPayload, CategoryStats, CategoryViewMode, ProductPreview,
    CHILDREN_PREVIEW, PRODUCTS_PREVIEW, STATUS_OPTIONS,
};
pub use form::{CategoryDraft, CATEGORY_TABS};
pub use row::{categories_for_rows, sort_option_spec, CATEGORY_SCHEMA, SORT_OPTIONS};
