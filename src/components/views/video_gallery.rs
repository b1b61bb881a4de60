use super::SectionHeading;
use crate::catalog::{Catalog, ContentKind, VideoItem};
use crate::comments::ThreadKey;
use crate::components::{CommentThread, Icon, UploadButton};
use dioxus::prelude::*;

#[component]
pub fn VideoGallery() -> Element {
    let catalog = use_context::<Signal<Catalog>>();
    let items = catalog.read().video();

    rsx! {
        section { id: "video", class: "py-20 px-4 bg-white",
            div { class: "container mx-auto max-w-6xl",
                SectionHeading {
                    title: "Видеогалерея",
                    subtitle: "Авторские видеопроизведения о русской природе и культуре",
                }
                div { class: "flex justify-center mb-8",
                    UploadButton { kind: ContentKind::Video }
                }
                div { class: "grid gap-8 md:grid-cols-2",
                    for item in items {
                        VideoCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn VideoCard(item: VideoItem) -> Element {
    rsx! {
        article { class: "overflow-hidden rounded-xl border border-zinc-200 bg-white shadow-sm",
            if let Some(url) = item.video_url.as_ref() {
                video {
                    class: "aspect-video w-full bg-black",
                    src: "{url}",
                    poster: item.thumbnail.clone().unwrap_or_default(),
                    controls: true,
                    preload: "metadata",
                }
            } else {
                div { class: "group relative aspect-video bg-zinc-200",
                    if let Some(thumbnail) = item.thumbnail.as_ref() {
                        img {
                            src: "{thumbnail}",
                            alt: "{item.title}",
                            class: "h-full w-full object-cover",
                        }
                    } else {
                        div { class: "flex h-full items-center justify-center text-zinc-400",
                            Icon { name: "video".to_string(), class: "w-12 h-12".to_string() }
                        }
                    }
                    div { class: "absolute inset-0 flex items-center justify-center bg-black/30 opacity-0 group-hover:opacity-100 transition-opacity",
                        div { class: "flex h-16 w-16 items-center justify-center rounded-full bg-white/90 text-amber-800",
                            Icon { name: "play".to_string(), class: "w-8 h-8 ml-1".to_string() }
                        }
                    }
                    if !item.duration.is_empty() {
                        span { class: "absolute bottom-2 right-2 rounded bg-black/70 px-2 py-1 text-xs text-white",
                            "{item.duration}"
                        }
                    }
                }
            }
            div { class: "p-6",
                h3 { class: "font-semibold text-xl mb-2", "{item.title}" }
                if !item.description.is_empty() {
                    p { class: "text-sm text-zinc-600", "{item.description}" }
                }
                CommentThread { thread: ThreadKey::new(ContentKind::Video, item.id) }
            }
        }
    }
}
