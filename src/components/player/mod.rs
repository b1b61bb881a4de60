//! The audio player rendered inside the selected library card.
//!
//! A coroutine owns the [`PlaybackController`]; UI controls and media events
//! are funnelled into it as [`PlayerInput`]s, and every input is followed by a
//! fresh copy of the playback state for rendering.

use crate::catalog::Catalog;
use crate::components::media::PlatformAudio;
use crate::components::{Icon, VolumeSignal};
use crate::config::{save_volume, PortalConfig};
use crate::playback::{
    format_time, playlist, BindingId, BindingSink, MediaEvent, PlaybackController, PlaybackState,
    TrackId,
};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use std::rc::Rc;
use tracing::{debug, warn};

mod controls;

use controls::{SkipButton, TrackNavButton, VolumeControl};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlayerInput {
    TogglePlay,
    Seek(f64),
    SetVolume(i32),
    /// The volume slider was released.
    CommitVolume,
    SkipBackward,
    SkipForward,
    Media(BindingId, MediaEvent),
}

impl PlayerInput {
    /// Only a released slider writes preferences; `SetVolume` fires per tick.
    fn persists_volume(self) -> bool {
        matches!(self, Self::CommitVolume)
    }
}

/// Upper bound of the seek slider.
fn seek_max(state: &PlaybackState) -> f64 {
    state.duration.filter(|d| *d > 0.0).unwrap_or(100.0)
}

#[component]
pub fn AudioPlayer(
    track_id: TrackId,
    autoplay: bool,
    on_close: EventHandler<()>,
    on_track_change: EventHandler<TrackId>,
) -> Element {
    let config = use_context::<PortalConfig>();
    let catalog = use_context::<Signal<Catalog>>();
    let mut volume = use_context::<VolumeSignal>().0;
    let mut state = use_signal(|| PlaybackState::idle(*volume.peek()));
    let skip_seconds = config.skip_seconds;

    let player = use_coroutine(move |commands: UnboundedReceiver<PlayerInput>| async move {
        let Some(media) = PlatformAudio::attach() else {
            warn!(track_id, "no audio element available");
            return;
        };
        let Some(track) = catalog.peek().find_track(track_id) else {
            warn!(track_id, "selected track is not in the catalog");
            return;
        };

        let (event_tx, event_rx) = futures_channel::mpsc::unbounded::<PlayerInput>();
        let sink: BindingSink = Rc::new(move |binding, event| {
            let _ = event_tx.unbounded_send(PlayerInput::Media(binding, event));
        });

        let mut controller = PlaybackController::new(
            media,
            catalog.peek().playlist(),
            *volume.peek(),
            skip_seconds,
            sink,
        );
        controller.load(track, autoplay);
        state.set(controller.state().clone());

        let mut inputs = futures_util::stream::select(commands, event_rx);
        while let Some(input) = inputs.next().await {
            let mut advance_to = None;
            match input {
                PlayerInput::TogglePlay => controller.toggle_play(),
                PlayerInput::Seek(seconds) => controller.seek(seconds),
                PlayerInput::SetVolume(percent) => {
                    controller.set_volume(percent);
                    let level = controller.state().volume;
                    volume.set(level);
                }
                PlayerInput::CommitVolume => {}
                PlayerInput::SkipBackward => controller.skip_backward(),
                PlayerInput::SkipForward => controller.skip_forward(),
                PlayerInput::Media(binding, event) => {
                    controller.set_playlist(catalog.peek().playlist());
                    advance_to = controller.handle_event(binding, event);
                }
            }
            state.set(controller.state().clone());
            if input.persists_volume() {
                save_volume(controller.state().volume);
            }

            if let Some(next) = advance_to {
                debug!(from = track_id, to = next, "advancing after track end");
                on_track_change.call(next);
            }
        }
    });

    let Some(track) = catalog.read().find_track(track_id) else {
        return rsx! {};
    };
    let tracks = catalog.read().playlist();
    let previous_id = playlist::previous(&tracks, track_id).map(|t| t.id);
    let next_id = playlist::next(&tracks, track_id).map(|t| t.id);

    let current = state();
    let elapsed = format_time(current.current_time);
    let total = format_time(current.duration_or_nan());
    let max = seek_max(&current);

    rsx! {
        div { class: "rounded-xl border border-amber-200 bg-white p-6 shadow-sm animate-fade-in",
            div { class: "flex items-start justify-between mb-4",
                div { class: "min-w-0",
                    h3 { class: "font-semibold text-lg truncate", "{track.title}" }
                    p { class: "text-sm text-zinc-500 truncate", "{track.author}" }
                }
                button {
                    r#type: "button",
                    class: "p-2 text-zinc-400 hover:text-zinc-900 transition-colors",
                    aria_label: "Закрыть плеер",
                    onclick: move |_| on_close.call(()),
                    Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                }
            }

            div { class: "space-y-2",
                input {
                    r#type: "range",
                    class: "w-full accent-amber-700",
                    min: "0",
                    max: "{max}",
                    step: "0.1",
                    value: "{current.current_time}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(seconds) = evt.value().parse::<f64>() {
                            player.send(PlayerInput::Seek(seconds));
                        }
                    },
                }
                div { class: "flex justify-between text-xs text-zinc-500 tabular-nums",
                    span { "{elapsed}" }
                    span { "{total}" }
                }
            }

            div { class: "mt-4 flex items-center justify-between gap-2",
                div { class: "flex items-center gap-1",
                    TrackNavButton {
                        icon: "skip-back",
                        label: "Предыдущий трек",
                        target: previous_id,
                        on_select: move |id: TrackId| on_track_change.call(id),
                    }
                    SkipButton {
                        icon: "rewind",
                        label: format!("Назад на {skip_seconds} секунд"),
                        onclick: move |_| player.send(PlayerInput::SkipBackward),
                    }
                    button {
                        r#type: "button",
                        class: "mx-2 flex h-12 w-12 items-center justify-center rounded-full bg-amber-700 text-white hover:bg-amber-800 transition-colors",
                        aria_label: if current.is_playing { "Пауза" } else { "Воспроизвести" },
                        onclick: move |_| player.send(PlayerInput::TogglePlay),
                        if current.is_playing {
                            Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
                        } else {
                            Icon { name: "play".to_string(), class: "w-5 h-5 ml-0.5".to_string() }
                        }
                    }
                    SkipButton {
                        icon: "fast-forward",
                        label: format!("Вперёд на {skip_seconds} секунд"),
                        onclick: move |_| player.send(PlayerInput::SkipForward),
                    }
                    TrackNavButton {
                        icon: "skip-forward",
                        label: "Следующий трек",
                        target: next_id,
                        on_select: move |id: TrackId| on_track_change.call(id),
                    }
                }
                VolumeControl {
                    volume: current.volume,
                    on_change: move |percent: i32| player.send(PlayerInput::SetVolume(percent)),
                    on_commit: move |_| player.send(PlayerInput::CommitVolume),
                }
            }
        }
    }
}
