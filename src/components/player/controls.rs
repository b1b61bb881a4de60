use crate::components::{volume_icon, Icon};
use crate::playback::TrackId;
use dioxus::prelude::*;

const ROUND_BUTTON: &str = "p-2 rounded-full text-zinc-600 hover:text-zinc-900 hover:bg-zinc-100 transition-colors";

/// Previous/next track. Disabled when there is no track in that direction.
#[component]
pub(super) fn TrackNavButton(
    icon: &'static str,
    label: &'static str,
    target: Option<TrackId>,
    on_select: EventHandler<TrackId>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "{ROUND_BUTTON} disabled:opacity-30 disabled:pointer-events-none",
            aria_label: label,
            title: label,
            disabled: target.is_none(),
            onclick: move |_| {
                if let Some(id) = target {
                    on_select.call(id);
                }
            },
            Icon { name: icon.to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

#[component]
pub(super) fn SkipButton(icon: &'static str, label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: ROUND_BUTTON,
            aria_label: "{label}",
            title: "{label}",
            onclick: move |evt| onclick.call(evt),
            Icon { name: icon.to_string(), class: "w-4 h-4".to_string() }
        }
    }
}

/// Volume icon with a slider that appears while hovered.
#[component]
pub(super) fn VolumeControl(
    volume: u8,
    on_change: EventHandler<i32>,
    on_commit: EventHandler<()>,
) -> Element {
    let mut hovered = use_signal(|| false);

    rsx! {
        div {
            class: "relative flex items-center gap-2",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            span { class: "p-2 text-zinc-600",
                Icon { name: volume_icon(volume).to_string(), class: "w-5 h-5".to_string() }
            }
            if hovered() {
                input {
                    r#type: "range",
                    class: "w-24 accent-amber-700",
                    min: "0",
                    max: "100",
                    step: "1",
                    value: "{volume}",
                    aria_label: "Громкость",
                    oninput: move |evt: FormEvent| {
                        if let Ok(percent) = evt.value().parse::<f64>() {
                            on_change.call(percent.round() as i32);
                        }
                    },
                    onchange: move |_| on_commit.call(()),
                }
            }
        }
    }
}
