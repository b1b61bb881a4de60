use super::{PORTAL_NAME, SECTION_LINKS};
use crate::catalog::hero_image;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let background = hero_image();

    rsx! {
        header { class: "relative h-[70vh] flex items-center justify-center overflow-hidden",
            div {
                class: "absolute inset-0 bg-cover bg-center",
                style: "background-image: url('{background}')",
                div { class: "absolute inset-0 bg-gradient-to-b from-black/50 via-black/30 to-stone-50" }
            }
            div { class: "relative z-10 text-center px-4 animate-fade-in",
                h1 { class: "text-6xl md:text-8xl font-bold text-white mb-4 drop-shadow-lg",
                    "{PORTAL_NAME}"
                }
                p { class: "text-xl md:text-2xl text-white/90 max-w-2xl mx-auto drop-shadow",
                    "Авторский портал аудио и видео контента о русской культуре и природе"
                }
            }
        }
    }
}

/// Sticky bar with anchors to each section.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "sticky top-0 z-30 bg-white/90 backdrop-blur border-b border-zinc-200",
            div { class: "container mx-auto max-w-6xl px-4 py-4 flex items-center justify-between",
                span { class: "font-semibold text-lg", "{PORTAL_NAME}" }
                div { class: "hidden md:flex gap-6 text-sm",
                    for (href, label) in SECTION_LINKS {
                        a {
                            key: "{href}",
                            href: "{href}",
                            class: "hover:text-amber-700 transition-colors",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
