//! Contract for the native media primitive the player drives.

use std::rc::Rc;

/// Push notifications raised by a media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position moved (seconds).
    TimeUpdate(f64),
    /// Metadata became available; carries the reported duration, which may be NaN.
    MetadataLoaded(f64),
    /// The source played to its natural end.
    Ended,
}

/// Receiver for [`MediaEvent`]s. Registered on bind, dropped on unbind.
pub type MediaEventSink = Rc<dyn Fn(MediaEvent)>;

/// Something that can load a URL and play it, in the shape of an HTML
/// `<audio>` element.
///
/// Implementations must stop delivering events to a sink once
/// [`MediaElement::unsubscribe`] returns.
pub trait MediaElement {
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Duration in seconds; NaN while unknown.
    fn duration(&self) -> f64;
    /// Volume as a fraction in `0.0..=1.0`.
    fn set_volume(&mut self, fraction: f64);
    fn subscribe(&mut self, sink: MediaEventSink);
    fn unsubscribe(&mut self);
}
