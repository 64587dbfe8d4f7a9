//! Состояние форм: черновик, проверка, фазы отправки

pub mod image_slot;
pub mod tag_list;
pub mod validation;
pub mod wizard;

pub use image_slot::ImageSlot;
pub use tag_list::TagList;
pub use validation::{Validation, ValidationErrors};
pub use wizard::{FormDraft, FormPhase, FormWizard};
