//! Platform media elements backing the audio player.
//!
//! The web build drives a real `<audio>` element through `web-sys`; desktop
//! builds drive one inside the webview through a small JavaScript bridge.

#[cfg(not(target_arch = "wasm32"))]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use bridge::BridgeAudioElement as PlatformAudio;
#[cfg(target_arch = "wasm32")]
pub use web::WebAudioElement as PlatformAudio;

use std::sync::atomic::{AtomicU64, Ordering};

static ELEMENT_SLOT: AtomicU64 = AtomicU64::new(1);

/// Unique slot for a new platform audio element.
fn next_element_slot() -> u64 {
    ELEMENT_SLOT.fetch_add(1, Ordering::Relaxed)
}

/// Sleep without blocking the UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u32) {
    let script = format!(
        r#"return (async function () {{
            await new Promise(resolve => setTimeout(resolve, {ms}));
            return true;
        }})();"#
    );
    let _ = dioxus::document::eval(&script).await;
}
