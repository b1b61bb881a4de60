use dioxus::prelude::*;

mod api;
mod catalog;
mod comments;
mod components;
mod config;
mod playback;
mod upload;

use components::PortalShell;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting portal");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "ОТЧИЗНА МОЯ" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta {
            name: "description",
            content: "Авторский портал аудио и видео контента о русской культуре и природе",
        }
        document::Meta { name: "theme-color", content: "#b45309" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: PORTAL_CSS }

        PortalShell {}
    }
}
