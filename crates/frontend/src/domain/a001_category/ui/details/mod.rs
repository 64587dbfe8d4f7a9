pub mod page;
pub mod view_model;

pub use page::CategoryDetails;
pub use view_model::CategoryDetailsVm;
