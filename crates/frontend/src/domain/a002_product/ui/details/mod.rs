pub mod page;
pub mod tabs;
pub mod view_model;

pub use page::ProductDetails;
pub use view_model::ProductDetailsVm;
