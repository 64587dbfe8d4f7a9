//! Табличный движок: поиск, фильтры, сортировка, пагинация, выбор, экспорт

pub mod export;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod row;
pub mod search;
pub mod selection;
pub mod sort;
pub mod state;

pub use filter::{FilterSet, FilterValue};
pub use pagination::{Page, PageWindow};
pub use row::{join_tags, split_tags, FieldValue, Row, RowId};
pub use selection::{BulkOutcome, SelectionSet};
pub use sort::{SortDirection, SortSpec};
pub use state::TableState;
