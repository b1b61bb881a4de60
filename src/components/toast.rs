use crate::components::{delay_ms, Icon};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, title: String, description: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            level,
            title,
            description,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for raising toasts from anywhere under the portal shell.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastController {
    queue: Signal<ToastQueue>,
    timeout_ms: u32,
}

impl ToastController {
    pub fn new(queue: Signal<ToastQueue>, timeout_ms: u32) -> Self {
        Self { queue, timeout_ms }
    }

    pub fn show(&self, level: ToastLevel, title: impl Into<String>, description: impl Into<String>) {
        let mut queue = self.queue;
        queue.write().push(level, title.into(), description.into());
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastLevel::Info, title, description);
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastLevel::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastLevel::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

#[component]
pub fn ToastStack() -> Element {
    let controller = use_context::<ToastController>();
    let toasts = controller.queue.read().toasts().to_vec();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone(), timeout_ms: controller.timeout_ms }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, timeout_ms: u32) -> Element {
    let controller = use_context::<ToastController>();
    let id = toast.id;

    // The timer lives with the card, so a toast dismissed by click takes its
    // timer with it.
    use_future(move || async move {
        delay_ms(timeout_ms).await;
        controller.dismiss(id);
    });

    let (icon, tone) = match toast.level {
        ToastLevel::Info => ("message", "border-zinc-300 bg-white text-zinc-900"),
        ToastLevel::Success => ("check", "border-emerald-300 bg-emerald-50 text-emerald-900"),
        ToastLevel::Error => ("alert", "border-red-300 bg-red-50 text-red-900"),
    };

    rsx! {
        button {
            r#type: "button",
            class: "w-full text-left rounded-lg border shadow-lg p-4 flex gap-3 items-start animate-fade-in {tone}",
            onclick: move |_| controller.dismiss(id),
            Icon { name: icon.to_string(), class: "w-5 h-5 mt-0.5 flex-shrink-0".to_string() }
            div { class: "min-w-0",
                p { class: "font-semibold text-sm", "{toast.title}" }
                if !toast.description.is_empty() {
                    p { class: "text-sm opacity-80 break-words", "{toast.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_arrival_order_and_unique_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastLevel::Info, "one".into(), String::new());
        let second = queue.push(ToastLevel::Error, "two".into(), "boom".into());

        assert_ne!(first, second);
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastLevel::Info, "one".into(), String::new());
        queue.push(ToastLevel::Success, "two".into(), String::new());

        queue.dismiss(first);
        queue.dismiss(first);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "two");
    }
}
