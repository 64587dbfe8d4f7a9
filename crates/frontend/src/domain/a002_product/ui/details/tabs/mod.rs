pub mod additional;
pub mod basic;
pub mod images;
pub mod inventory;
pub mod variants;

pub use additional::AdditionalTab;
pub use basic::BasicTab;
pub use images::ImagesTab;
pub use inventory::InventoryTab;
pub use variants::VariantsTab;
