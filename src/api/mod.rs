//! HTTP collaborators: file storage and the media metadata API.

mod media_api;
pub mod models;

pub use media_api::*;
pub use models::*;
