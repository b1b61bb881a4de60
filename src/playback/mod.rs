//! Audio playback: time formatting, playlist navigation, and the controller
//! that binds a track to a media element.

mod controller;
mod format;
mod media;
pub mod playlist;

pub use controller::*;
pub use format::*;
pub use media::*;
pub use playlist::{Track, TrackId};
