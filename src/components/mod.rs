//! Dioxus components making up the portal page.

mod app;
mod comment_thread;
mod icons;
pub mod media;
mod player;
mod toast;
mod upload_dialog;
pub mod views;

pub use app::*;
pub use comment_thread::*;
pub use icons::*;
pub use media::delay_ms;
pub use player::*;
pub use toast::*;
pub use upload_dialog::*;
