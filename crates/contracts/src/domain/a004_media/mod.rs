pub mod aggregate;

pub use aggregate::{
    unsaved_uploads, DeleteImageRequest, UploadedImage, MULTIPLE_UPLOAD_FIELD, SINGLE_UPLOAD_FIELD,
};
