pub mod aggregate;

pub use aggregate::{filter_brands, group_by_letter, Brand, BrandRef};
