pub mod data_table;
pub mod error_banner;
pub mod filter_panel;
pub mod form_field;
pub mod image_upload;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod tag_input;

pub use data_table::{ActiveFilterTags, ColumnFilters, DataTable};
pub use error_banner::ErrorBanner;
pub use filter_panel::{FilterPanel, FilterTag};
pub use form_field::FormField;
pub use image_upload::{ImageGallery, ImageUpload};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use tag_input::TagInput;
