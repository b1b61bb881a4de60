//! Playback controller: owns playback state for the bound track and drives a
//! [`MediaElement`].

use super::media::{MediaElement, MediaEvent, MediaEventSink};
use super::playlist::{self, Track, TrackId};
use std::rc::Rc;
use tracing::debug;

/// Identifies one bind of the controller to a source. Events tagged with an
/// older binding are dropped.
pub type BindingId = u64;

/// Sink handed to the controller's owner; events arrive tagged with the
/// binding that produced them.
pub type BindingSink = Rc<dyn Fn(BindingId, MediaEvent)>;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time: f64,
    /// `None` until the media element reports a usable duration.
    pub duration: Option<f64>,
    pub volume: u8,
}

impl PlaybackState {
    /// State of a freshly bound track.
    pub fn idle(volume: u8) -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: None,
            volume,
        }
    }

    /// Duration for display purposes, NaN when unknown.
    pub fn duration_or_nan(&self) -> f64 {
        self.duration.unwrap_or(f64::NAN)
    }
}

pub struct PlaybackController<M: MediaElement> {
    media: M,
    playlist: Vec<Track>,
    current: Option<Track>,
    state: PlaybackState,
    skip_seconds: f64,
    binding: BindingId,
    has_source: bool,
    sink: BindingSink,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(
        media: M,
        playlist: Vec<Track>,
        volume: u8,
        skip_seconds: f64,
        sink: BindingSink,
    ) -> Self {
        Self {
            media,
            playlist,
            current: None,
            state: PlaybackState::idle(volume.min(100)),
            skip_seconds,
            binding: 0,
            has_source: false,
            sink,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub fn binding(&self) -> BindingId {
        self.binding
    }

    /// Replace the playlist used for navigation. The bound track is kept.
    pub fn set_playlist(&mut self, playlist: Vec<Track>) {
        self.playlist = playlist;
    }

    /// Bind to `track`, dropping every trace of the previous one.
    ///
    /// Position, duration and play state reset; volume carries over. When
    /// `autoplay` is set and the track has a source, playback starts at once.
    pub fn load(&mut self, track: Track, autoplay: bool) {
        self.unbind();
        self.binding += 1;
        self.state = PlaybackState::idle(self.state.volume);

        if let Some(url) = track.source() {
            self.media.load(url);
            self.media.set_volume(f64::from(self.state.volume) / 100.0);
            let sink = self.sink.clone();
            let binding = self.binding;
            let tagged: MediaEventSink = Rc::new(move |event| sink(binding, event));
            self.media.subscribe(tagged);
            self.has_source = true;
            if autoplay {
                self.media.play();
                self.state.is_playing = true;
            }
        }

        debug!(
            track_id = track.id,
            binding = self.binding,
            autoplay,
            has_source = self.has_source,
            "bound playback to track"
        );
        self.current = Some(track);
    }

    fn unbind(&mut self) {
        if self.has_source {
            self.media.unsubscribe();
            self.media.pause();
            self.has_source = false;
        }
    }

    pub fn toggle_play(&mut self) {
        if !self.has_source {
            return;
        }
        if self.state.is_playing {
            self.media.pause();
            self.state.is_playing = false;
        } else {
            self.media.play();
            self.state.is_playing = true;
        }
    }

    fn clamp_position(&self, seconds: f64) -> f64 {
        if seconds.is_nan() {
            return 0.0;
        }
        let lower = seconds.max(0.0);
        match self.state.duration {
            Some(duration) => lower.min(duration),
            None if lower.is_finite() => lower,
            None => 0.0,
        }
    }

    /// Move to `target` seconds. State updates before the element confirms.
    pub fn seek(&mut self, target: f64) {
        if !self.has_source {
            return;
        }
        let position = self.clamp_position(target);
        self.media.set_current_time(position);
        self.state.current_time = position;
    }

    pub fn set_volume(&mut self, percent: i32) {
        let volume = percent.clamp(0, 100) as u8;
        self.state.volume = volume;
        self.media.set_volume(f64::from(volume) / 100.0);
    }

    pub fn skip_backward(&mut self) {
        self.seek(self.state.current_time - self.skip_seconds);
    }

    pub fn skip_forward(&mut self) {
        self.seek(self.state.current_time + self.skip_seconds);
    }

    /// The track after the bound one, if any.
    pub fn next_track(&self) -> Option<&Track> {
        let current = self.current.as_ref()?;
        playlist::next(&self.playlist, current.id)
    }

    /// Apply a notification from the media element.
    ///
    /// Returns the id of the track to advance to when the bound track ended
    /// and has a successor.
    pub fn handle_event(&mut self, binding: BindingId, event: MediaEvent) -> Option<TrackId> {
        if binding != self.binding || !self.has_source {
            return None;
        }
        match event {
            MediaEvent::TimeUpdate(seconds) => {
                if seconds.is_finite() {
                    self.state.current_time = seconds.max(0.0);
                }
                None
            }
            MediaEvent::MetadataLoaded(duration) => {
                self.state.duration = (duration.is_finite() && duration >= 0.0).then_some(duration);
                None
            }
            MediaEvent::Ended => {
                self.state.is_playing = false;
                let next = self.next_track().map(|track| track.id);
                debug!(binding, next = ?next, "track ended");
                next
            }
        }
    }
}

impl<M: MediaElement> Drop for PlaybackController<M> {
    fn drop(&mut self) {
        self.unbind();
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use crate::playback::media::{MediaElement, MediaEvent, MediaEventSink};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Load(String),
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
        Subscribe,
        Unsubscribe,
    }

    #[derive(Default)]
    pub struct FakeState {
        pub calls: Vec<Call>,
        pub sink: Option<MediaEventSink>,
        pub time: f64,
    }

    /// Records every call; clones share the same log.
    #[derive(Clone, Default)]
    pub struct FakeMedia(pub Rc<RefCell<FakeState>>);

    impl FakeMedia {
        pub fn calls(&self) -> Vec<Call> {
            self.0.borrow().calls.clone()
        }

        pub fn emit(&self, event: MediaEvent) -> bool {
            let sink = self.0.borrow().sink.clone();
            match sink {
                Some(sink) => {
                    sink(event);
                    true
                }
                None => false,
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn load(&mut self, url: &str) {
            self.0.borrow_mut().calls.push(Call::Load(url.to_string()));
        }
        fn play(&mut self) {
            self.0.borrow_mut().calls.push(Call::Play);
        }
        fn pause(&mut self) {
            self.0.borrow_mut().calls.push(Call::Pause);
        }
        fn current_time(&self) -> f64 {
            self.0.borrow().time
        }
        fn set_current_time(&mut self, seconds: f64) {
            let mut state = self.0.borrow_mut();
            state.time = seconds;
            state.calls.push(Call::Seek(seconds));
        }
        fn duration(&self) -> f64 {
            f64::NAN
        }
        fn set_volume(&mut self, fraction: f64) {
            self.0.borrow_mut().calls.push(Call::Volume(fraction));
        }
        fn subscribe(&mut self, sink: MediaEventSink) {
            let mut state = self.0.borrow_mut();
            state.sink = Some(sink);
            state.calls.push(Call::Subscribe);
        }
        fn unsubscribe(&mut self) {
            let mut state = self.0.borrow_mut();
            state.sink = None;
            state.calls.push(Call::Unsubscribe);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{Call, FakeMedia};
    use super::*;
    use crate::playback::playlist::track;
    use std::cell::RefCell;

    type Inbox = Rc<RefCell<Vec<(BindingId, MediaEvent)>>>;

    fn controller() -> (PlaybackController<FakeMedia>, FakeMedia, Inbox) {
        let media = FakeMedia::default();
        let inbox: Inbox = Rc::default();
        let sink_inbox = inbox.clone();
        let sink: BindingSink =
            Rc::new(move |binding, event| sink_inbox.borrow_mut().push((binding, event)));
        let playlist = vec![track(1, "A"), track(2, "B"), track(3, "C")];
        let controller = PlaybackController::new(media.clone(), playlist, 70, 10.0, sink);
        (controller, media, inbox)
    }

    fn deliver(controller: &mut PlaybackController<FakeMedia>, inbox: &Inbox) -> Vec<TrackId> {
        let pending: Vec<_> = inbox.borrow_mut().drain(..).collect();
        pending
            .into_iter()
            .filter_map(|(binding, event)| controller.handle_event(binding, event))
            .collect()
    }

    #[test]
    fn manual_selection_does_not_autoplay() {
        let (mut controller, media, _) = controller();
        controller.load(track(1, "A"), false);

        assert!(!controller.state().is_playing);
        assert!(!media.calls().contains(&Call::Play));
        assert_eq!(
            media.calls(),
            vec![
                Call::Load("https://media.example/1.mp3".to_string()),
                Call::Volume(0.7),
                Call::Subscribe,
            ]
        );
    }

    #[test]
    fn navigation_load_autoplays() {
        let (mut controller, media, _) = controller();
        controller.load(track(2, "B"), true);
        assert!(controller.state().is_playing);
        assert_eq!(media.calls().last(), Some(&Call::Play));
    }

    #[test]
    fn toggle_play_flips_state() {
        let (mut controller, media, _) = controller();
        controller.load(track(1, "A"), false);

        controller.toggle_play();
        assert!(controller.state().is_playing);
        controller.toggle_play();
        assert!(!controller.state().is_playing);
        assert_eq!(&media.calls()[3..], &[Call::Play, Call::Pause]);
    }

    #[test]
    fn toggle_without_source_is_noop() {
        let (mut controller, media, _) = controller();
        controller.toggle_play();
        assert!(!controller.state().is_playing);

        let mut silent = track(5, "Silent");
        silent.audio_url = None;
        controller.load(silent, true);
        controller.toggle_play();
        assert!(!controller.state().is_playing);
        assert!(media.calls().is_empty());
    }

    #[test]
    fn track_switch_resets_position_but_keeps_volume() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(1, "A"), false);
        media.emit(MediaEvent::MetadataLoaded(200.0));
        deliver(&mut controller, &inbox);
        controller.seek(50.0);
        controller.set_volume(30);
        assert_eq!(controller.state().current_time, 50.0);

        controller.load(track(2, "B"), true);

        let state = controller.state();
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, None);
        assert_eq!(state.volume, 30);
        assert!(media.calls().contains(&Call::Volume(0.3)));
    }

    #[test]
    fn rebind_unsubscribes_before_loading_new_source() {
        let (mut controller, media, _) = controller();
        controller.load(track(1, "A"), false);
        controller.load(track(2, "B"), false);

        let calls = media.calls();
        let unsubscribe = calls.iter().position(|c| *c == Call::Unsubscribe);
        let second_load = calls
            .iter()
            .position(|c| *c == Call::Load("https://media.example/2.mp3".to_string()));
        assert!(unsubscribe.is_some());
        assert!(unsubscribe < second_load);
    }

    #[test]
    fn events_from_previous_binding_are_ignored() {
        let (mut controller, _media, _) = controller();
        controller.load(track(1, "A"), false);
        let stale = controller.binding();
        controller.load(track(2, "B"), false);

        assert_eq!(controller.handle_event(stale, MediaEvent::TimeUpdate(42.0)), None);
        assert_eq!(controller.handle_event(stale, MediaEvent::Ended), None);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn seek_updates_state_optimistically() {
        let (mut controller, media, _) = controller();
        controller.load(track(1, "A"), false);
        controller.seek(12.5);
        assert_eq!(controller.state().current_time, 12.5);
        assert_eq!(media.calls().last(), Some(&Call::Seek(12.5)));
    }

    #[test]
    fn skip_clamps_to_track_bounds() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(1, "A"), false);
        media.emit(MediaEvent::MetadataLoaded(100.0));
        media.emit(MediaEvent::TimeUpdate(95.0));
        deliver(&mut controller, &inbox);

        controller.skip_forward();
        assert_eq!(controller.state().current_time, 100.0);

        controller.seek(3.0);
        controller.skip_backward();
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn skip_forward_without_duration_is_unbounded() {
        let (mut controller, _media, _) = controller();
        controller.load(track(1, "A"), false);
        controller.skip_forward();
        controller.skip_forward();
        assert_eq!(controller.state().current_time, 20.0);
    }

    #[test]
    fn infinite_seek_lands_on_the_known_end() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(1, "A"), false);
        media.emit(MediaEvent::MetadataLoaded(100.0));
        deliver(&mut controller, &inbox);

        controller.seek(f64::INFINITY);
        assert_eq!(controller.state().current_time, 100.0);
        controller.seek(f64::NEG_INFINITY);
        assert_eq!(controller.state().current_time, 0.0);
        controller.seek(f64::NAN);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn infinite_seek_without_duration_stays_at_start() {
        let (mut controller, _media, _) = controller();
        controller.load(track(1, "A"), false);
        controller.seek(f64::INFINITY);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn volume_is_clamped() {
        let (mut controller, media, _) = controller();
        controller.set_volume(150);
        assert_eq!(controller.state().volume, 100);
        controller.set_volume(-4);
        assert_eq!(controller.state().volume, 0);
        assert_eq!(media.calls(), vec![Call::Volume(1.0), Call::Volume(0.0)]);
    }

    #[test]
    fn nan_duration_stays_unknown() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(1, "A"), false);
        media.emit(MediaEvent::MetadataLoaded(f64::NAN));
        deliver(&mut controller, &inbox);
        assert_eq!(controller.state().duration, None);
        assert_eq!(
            crate::playback::format_time(controller.state().duration_or_nan()),
            "0:00"
        );
    }

    #[test]
    fn ended_requests_successor() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(1, "A"), true);
        media.emit(MediaEvent::Ended);

        assert_eq!(deliver(&mut controller, &inbox), vec![2]);
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn ended_on_last_track_just_stops() {
        let (mut controller, media, inbox) = controller();
        controller.load(track(3, "C"), true);
        media.emit(MediaEvent::Ended);

        assert!(deliver(&mut controller, &inbox).is_empty());
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn drop_releases_media_element() {
        let (mut controller, media, _) = controller();
        controller.load(track(1, "A"), true);
        drop(controller);

        let calls = media.calls();
        assert_eq!(&calls[calls.len() - 2..], &[Call::Unsubscribe, Call::Pause]);
        assert!(!media.emit(MediaEvent::Ended));
    }

    #[test]
    fn navigation_neighbours_follow_bound_track() {
        let (mut controller, _media, _) = controller();
        assert!(controller.next_track().is_none());
        controller.load(track(2, "B"), false);
        assert_eq!(controller.next_track().map(|t| t.id), Some(3));
    }
}
