use crate::api::{HttpMediaApi, MediaApi};
use crate::catalog::{Catalog, ContentKind};
use crate::comments::CommentBoard;
use crate::components::views::{
    AboutSection, AudioLibrary, ContactSection, Footer, Hero, NavBar, PhotoGallery, VideoGallery,
};
use crate::components::{ToastController, ToastQueue, ToastStack};
use crate::config::{load_config, load_preferences, PortalConfig};
use crate::playback::TrackId;
use dioxus::prelude::*;
use tracing::{info, warn};

/// Player volume in percent, shared by every player instance.
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<u8>);

/// The audio track whose card hosts the player, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub track_id: TrackId,
    /// Start playing as soon as the player mounts.
    pub autoplay: bool,
}

#[derive(Clone, Copy)]
pub struct SelectionSignal(pub Signal<Option<Selection>>);

/// Pull the remote entries of `kind` into the catalog. On failure the
/// current entries stay.
pub async fn refresh_catalog(api: HttpMediaApi, mut catalog: Signal<Catalog>, kind: ContentKind) {
    match api.list_media(kind).await {
        Ok(rows) => {
            info!(kind = %kind, count = rows.len(), "catalog refreshed");
            catalog.write().replace_remote(kind, rows);
        }
        Err(err) => warn!(kind = %kind, error = %err, "catalog refresh failed"),
    }
}

#[component]
pub fn PortalShell() -> Element {
    let config = use_hook(load_config);
    let initial_volume = use_hook(|| load_preferences().volume_or(config.default_volume));

    let catalog = use_signal(Catalog::default);
    let comments = use_signal(CommentBoard::default);
    let volume = use_signal(|| initial_volume);
    let selection = use_signal(|| None::<Selection>);
    let toast_queue = use_signal(ToastQueue::default);

    use_context_provider(|| config.clone());
    use_context_provider(|| catalog);
    use_context_provider(|| comments);
    use_context_provider(|| VolumeSignal(volume));
    use_context_provider(|| SelectionSignal(selection));
    use_context_provider(|| ToastController::new(toast_queue, config.toast_timeout_ms));

    {
        let config = config.clone();
        use_hook(move || {
            let api = HttpMediaApi::from_config(&config);
            spawn(refresh_catalog(api.clone(), catalog, ContentKind::Audio));
            spawn(refresh_catalog(api, catalog, ContentKind::Video));
        });
    }

    rsx! {
        div { class: "min-h-screen bg-stone-50 text-zinc-900",
            Hero {}
            NavBar {}
            main {
                AudioLibrary {}
                VideoGallery {}
                PhotoGallery {}
                AboutSection {}
                ContactSection {}
            }
            Footer {}
            ToastStack {}
        }
    }
}

/// Endpoints currently in use.
pub fn use_media_api() -> HttpMediaApi {
    let config = use_context::<PortalConfig>();
    HttpMediaApi::from_config(&config)
}
