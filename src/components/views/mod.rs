//! Page sections, top to bottom.

mod about;
mod audio_library;
mod contact;
mod footer;
mod header;
mod photo_gallery;
mod video_gallery;

pub use about::*;
pub use audio_library::*;
pub use contact::*;
pub use footer::*;
pub use header::*;
pub use photo_gallery::*;
pub use video_gallery::*;

use dioxus::prelude::*;

/// In-page anchors shown in the navigation bar and the footer.
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("#audio", "Аудио"),
    ("#video", "Видео"),
    ("#gallery", "Галерея"),
    ("#about", "О проекте"),
    ("#contact", "Контакты"),
];

pub const PORTAL_NAME: &str = "ОТЧИЗНА МОЯ";

#[component]
fn SectionHeading(title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx! {
        div { class: "text-center mb-12",
            h2 { class: "text-4xl md:text-5xl font-bold mb-4", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-lg text-zinc-500 max-w-2xl mx-auto", "{subtitle}" }
            }
        }
    }
}
