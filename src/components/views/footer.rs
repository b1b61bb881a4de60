use super::{PORTAL_NAME, SECTION_LINKS};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-zinc-900 text-zinc-100 py-12 px-4",
            div { class: "container mx-auto max-w-6xl text-center",
                h3 { class: "text-3xl font-bold mb-4", "{PORTAL_NAME}" }
                p { class: "text-zinc-400 mb-6", "Авторский портал русской культуры и природы" }
                div { class: "flex flex-wrap justify-center gap-6 mb-6 text-sm",
                    for (href, label) in SECTION_LINKS {
                        a {
                            key: "{href}",
                            href: "{href}",
                            class: "hover:text-amber-400 transition-colors",
                            "{label}"
                        }
                    }
                }
                p { class: "text-sm text-zinc-500", "© 2024 {PORTAL_NAME}. Все права защищены." }
            }
        }
    }
}
