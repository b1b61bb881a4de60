use super::next_element_slot;
use crate::playback::{MediaElement, MediaEvent, MediaEventSink};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlAudioElement};

/// Find the audio element for `slot`, creating it on first use.
fn get_or_create_audio_element(slot: u64) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    let id = format!("otchizna-audio-{slot}");

    if let Some(existing) = document.get_element_by_id(&id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(&id);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

type Listener = (&'static str, Closure<dyn FnMut()>);

/// `<audio>` element with listeners that are removed again on unsubscribe.
///
/// Every player gets its own element, so a player being torn down can never
/// pause the one that replaced it.
pub struct WebAudioElement {
    audio: HtmlAudioElement,
    listeners: Vec<Listener>,
}

impl WebAudioElement {
    pub fn attach() -> Option<Self> {
        get_or_create_audio_element(next_element_slot()).map(|audio| Self {
            audio,
            listeners: Vec::new(),
        })
    }

    fn listen(&mut self, event: &'static str, callback: Box<dyn FnMut()>) {
        let closure = Closure::wrap(callback);
        let _ = self
            .audio
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.listeners.push((event, closure));
    }
}

impl MediaElement for WebAudioElement {
    fn load(&mut self, url: &str) {
        self.audio.set_src(url);
        self.audio.load();
    }

    fn play(&mut self) {
        // Autoplay policy or a broken source rejects the promise; playback
        // simply does not start.
        if let Ok(promise) = self.audio.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    fn pause(&mut self) {
        let _ = self.audio.pause();
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn set_volume(&mut self, fraction: f64) {
        self.audio.set_volume(fraction.clamp(0.0, 1.0));
    }

    fn subscribe(&mut self, sink: MediaEventSink) {
        self.unsubscribe();

        let audio = self.audio.clone();
        let on_time = sink.clone();
        self.listen(
            "timeupdate",
            Box::new(move || on_time(MediaEvent::TimeUpdate(audio.current_time()))),
        );

        let audio = self.audio.clone();
        let on_metadata = sink.clone();
        self.listen(
            "loadedmetadata",
            Box::new(move || on_metadata(MediaEvent::MetadataLoaded(audio.duration()))),
        );

        self.listen("ended", Box::new(move || sink(MediaEvent::Ended)));
    }

    fn unsubscribe(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .audio
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WebAudioElement {
    fn drop(&mut self) {
        self.unsubscribe();
        let _ = self.audio.pause();
        self.audio.remove();
    }
}
