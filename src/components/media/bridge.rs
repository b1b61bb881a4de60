use super::{delay_ms, next_element_slot};
use crate::playback::{MediaElement, MediaEvent, MediaEventSink};
use dioxus::core::Task;
use dioxus::prelude::*;
use serde::Deserialize;
use std::cell::Cell;
use std::rc::Rc;

const POLL_INTERVAL_MS: u32 = 250;

/// Installs `window.__otchiznaAudioBridge`, which keeps one hidden `<audio>`
/// element per slot and answers commands and snapshots for it.
const AUDIO_BRIDGE_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__otchiznaAudioBridge) {
    return true;
  }

  const elements = new Map();
  const element = (slot) => {
    let audio = elements.get(slot);
    if (!audio) {
      audio = document.createElement("audio");
      audio.id = `otchizna-audio-${slot}`;
      audio.preload = "metadata";
      audio.style.display = "none";
      document.body.appendChild(audio);
      elements.set(slot, audio);
    }
    return audio;
  };

  window.__otchiznaAudioBridge = {
    apply(slot, cmd) {
      if (!cmd || !cmd.type) return;
      const audio = element(slot);
      switch (cmd.type) {
        case "load":
          audio.src = cmd.src || "";
          audio.load();
          break;
        case "play":
          audio.play().catch(() => {});
          break;
        case "pause":
          audio.pause();
          break;
        case "seek":
          if (typeof cmd.position === "number" && Number.isFinite(cmd.position)) {
            try {
              audio.currentTime = Math.max(0, cmd.position);
            } catch (_err) {}
          }
          break;
        case "volume":
          if (typeof cmd.value === "number") {
            audio.volume = Math.max(0, Math.min(1, cmd.value));
          }
          break;
      }
    },
    snapshot(slot) {
      const audio = elements.get(slot);
      if (!audio) return null;
      return {
        current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : null,
        ended: !!audio.ended,
      };
    },
    release(slot) {
      const audio = elements.get(slot);
      if (!audio) return;
      audio.pause();
      audio.removeAttribute("src");
      audio.remove();
      elements.delete(slot);
    },
  };
  return true;
})();
"#;

#[derive(Debug, Clone, Copy, Deserialize)]
struct BridgeSnapshot {
    current_time: f64,
    #[serde(default)]
    duration: Option<f64>,
    ended: bool,
}

fn bridge_command(slot: u64, value: serde_json::Value) {
    let _ = document::eval(AUDIO_BRIDGE_BOOTSTRAP_JS);
    let script = format!(
        r#"(function () {{
            const bridge = window.__otchiznaAudioBridge;
            if (!bridge) return false;
            bridge.apply({slot}, {value});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

async fn bridge_snapshot(slot: u64) -> Option<BridgeSnapshot> {
    let eval = document::eval(&format!(
        r#"const bridge = window.__otchiznaAudioBridge;
        return bridge ? bridge.snapshot({slot}) : null;"#
    ));
    eval.join::<Option<BridgeSnapshot>>().await.ok().flatten()
}

/// Audio element living in the desktop webview. The webview cannot push
/// events across the bridge, so a polling task turns snapshots into
/// [`MediaEvent`]s while subscribed.
pub struct BridgeAudioElement {
    slot: u64,
    current_time: Rc<Cell<f64>>,
    duration: Rc<Cell<f64>>,
    poller: Option<Task>,
}

impl BridgeAudioElement {
    pub fn attach() -> Option<Self> {
        let _ = document::eval(AUDIO_BRIDGE_BOOTSTRAP_JS);
        Some(Self {
            slot: next_element_slot(),
            current_time: Rc::new(Cell::new(0.0)),
            duration: Rc::new(Cell::new(f64::NAN)),
            poller: None,
        })
    }
}

impl MediaElement for BridgeAudioElement {
    fn load(&mut self, url: &str) {
        self.current_time.set(0.0);
        self.duration.set(f64::NAN);
        bridge_command(self.slot, serde_json::json!({ "type": "load", "src": url }));
    }

    fn play(&mut self) {
        bridge_command(self.slot, serde_json::json!({ "type": "play" }));
    }

    fn pause(&mut self) {
        bridge_command(self.slot, serde_json::json!({ "type": "pause" }));
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time.set(seconds);
        bridge_command(self.slot, serde_json::json!({ "type": "seek", "position": seconds }));
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn set_volume(&mut self, fraction: f64) {
        bridge_command(self.slot, serde_json::json!({ "type": "volume", "value": fraction.clamp(0.0, 1.0) }));
    }

    fn subscribe(&mut self, sink: MediaEventSink) {
        self.unsubscribe();
        let current_time = self.current_time.clone();
        let duration = self.duration.clone();
        let slot = self.slot;

        self.poller = Some(spawn(async move {
            let mut last_time = -1.0f64;
            let mut announced_duration: Option<f64> = None;
            let mut ended_sent = false;

            loop {
                delay_ms(POLL_INTERVAL_MS).await;
                let Some(snapshot) = bridge_snapshot(slot).await else {
                    continue;
                };

                current_time.set(snapshot.current_time);
                if (snapshot.current_time - last_time).abs() >= 0.2 {
                    last_time = snapshot.current_time;
                    sink(MediaEvent::TimeUpdate(snapshot.current_time));
                }

                if let Some(total) = snapshot.duration {
                    duration.set(total);
                    if announced_duration != Some(total) {
                        announced_duration = Some(total);
                        sink(MediaEvent::MetadataLoaded(total));
                    }
                }

                if snapshot.ended && !ended_sent {
                    ended_sent = true;
                    sink(MediaEvent::Ended);
                } else if !snapshot.ended {
                    ended_sent = false;
                }
            }
        }));
    }

    fn unsubscribe(&mut self) {
        if let Some(task) = self.poller.take() {
            task.cancel();
        }
    }
}

impl Drop for BridgeAudioElement {
    fn drop(&mut self) {
        self.unsubscribe();
        let _ = document::eval(&format!(
            r#"const bridge = window.__otchiznaAudioBridge;
            if (bridge) bridge.release({slot});"#,
            slot = self.slot
        ));
    }
}
