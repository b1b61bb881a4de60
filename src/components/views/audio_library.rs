use super::SectionHeading;
use crate::catalog::{AudioItem, Catalog, ContentKind};
use crate::comments::ThreadKey;
use crate::components::{AudioPlayer, CommentThread, Icon, Selection, SelectionSignal, UploadButton};
use crate::playback::TrackId;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn AudioLibrary() -> Element {
    let catalog = use_context::<Signal<Catalog>>();
    let items = catalog.read().audio();

    rsx! {
        section { id: "audio", class: "py-20 px-4",
            div { class: "container mx-auto max-w-6xl",
                SectionHeading {
                    title: "Аудиотека",
                    subtitle: "Коллекция авторских аудиопроизведений о русской культуре",
                }
                div { class: "flex justify-center mb-8",
                    UploadButton { kind: ContentKind::Audio }
                }
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for item in items {
                        AudioCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn AudioCard(item: AudioItem) -> Element {
    let mut selection = use_context::<SelectionSignal>().0;
    let id = item.id;
    let selected = selection().filter(|current| current.track_id == id);

    rsx! {
        article { class: "rounded-xl border border-zinc-200 bg-white p-6 shadow-sm flex flex-col",
            div { class: "flex items-start gap-4 mb-4",
                div { class: "flex h-12 w-12 flex-shrink-0 items-center justify-center rounded-lg bg-amber-100 text-amber-800",
                    Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                }
                div { class: "min-w-0",
                    h3 { class: "font-semibold text-lg", "{item.title}" }
                    p { class: "text-sm text-zinc-500", "{item.author}" }
                    if !item.duration.is_empty() {
                        p { class: "text-xs text-zinc-400 mt-1", "{item.duration}" }
                    }
                }
            }
            if !item.description.is_empty() {
                p { class: "text-sm text-zinc-600 mb-4", "{item.description}" }
            }

            if let Some(current) = selected {
                AudioPlayer {
                    key: "{id}",
                    track_id: id,
                    autoplay: current.autoplay,
                    on_close: move |_| selection.set(None),
                    on_track_change: move |next: TrackId| {
                        debug!(from = id, to = next, "switching track");
                        selection.set(Some(Selection { track_id: next, autoplay: true }));
                    },
                }
            } else {
                button {
                    r#type: "button",
                    class: "inline-flex w-full items-center justify-center gap-2 rounded-md bg-amber-700 px-4 py-2 text-sm font-medium text-white hover:bg-amber-800 transition-colors",
                    onclick: move |_| selection.set(Some(Selection { track_id: id, autoplay: false })),
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                    "Воспроизвести"
                }
            }

            CommentThread { thread: ThreadKey::new(ContentKind::Audio, id) }
        }
    }
}
