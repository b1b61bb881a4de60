//! Upload dialog logic: draft validation, the store-then-save pipeline, and
//! the dialog's state machine.

mod dialog;
mod draft;
mod pipeline;

pub use dialog::*;
pub use draft::*;
pub use pipeline::*;
