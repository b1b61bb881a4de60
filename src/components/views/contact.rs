use super::SectionHeading;
use crate::components::{Icon, ToastController};
use dioxus::prelude::*;
use tracing::info;

const FIELD: &str = "w-full rounded-md border border-zinc-300 px-3 py-2";

/// Contact form contents. Messages are acknowledged locally and never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// Name, email and message must be filled in; the subject is optional.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let toasts = use_context::<ToastController>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !draft.read().is_complete() {
            toasts.error("Ошибка", "Заполните имя, email и сообщение");
            return;
        }
        info!(subject = %draft.read().subject.trim(), "contact message acknowledged");
        draft.set(ContactDraft::default());
        toasts.info("Спасибо!", "Ваше сообщение получено");
    };

    let current = draft();

    rsx! {
        section { id: "contact", class: "py-20 px-4",
            div { class: "container mx-auto max-w-2xl",
                SectionHeading {
                    title: "Связаться с нами",
                    subtitle: "Есть вопросы или предложения? Напишите нам!",
                }
                div { class: "rounded-xl border border-zinc-200 bg-white p-8 shadow-sm",
                    form { class: "space-y-4", onsubmit: on_submit,
                        div {
                            label { class: "block text-sm font-medium mb-2", "Ваше имя" }
                            input {
                                class: FIELD,
                                placeholder: "Иван Иванов",
                                value: "{current.name}",
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium mb-2", "Email" }
                            input {
                                class: FIELD,
                                r#type: "email",
                                placeholder: "ivan@example.com",
                                value: "{current.email}",
                                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium mb-2", "Тема сообщения" }
                            input {
                                class: FIELD,
                                placeholder: "О чём вы хотите написать?",
                                value: "{current.subject}",
                                oninput: move |evt: FormEvent| draft.write().subject = evt.value(),
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium mb-2", "Сообщение" }
                            textarea {
                                class: FIELD,
                                rows: "6",
                                placeholder: "Ваше сообщение...",
                                value: "{current.message}",
                                oninput: move |evt: FormEvent| draft.write().message = evt.value(),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "w-full inline-flex items-center justify-center gap-2 rounded-md bg-amber-700 px-4 py-3 font-medium text-white hover:bg-amber-800 transition-colors",
                            Icon { name: "send".to_string(), class: "w-5 h-5".to_string() }
                            "Отправить сообщение"
                        }
                    }

                    hr { class: "my-8 border-zinc-200" }

                    div { class: "space-y-4",
                        h3 { class: "font-semibold text-lg", "Контактная информация" }
                        div { class: "flex items-center gap-3 text-zinc-500",
                            Icon { name: "mail".to_string(), class: "w-5 h-5".to_string() }
                            span { "info@otchiznamoya.ru" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Иван".to_string(),
            email: "ivan@example.com".to_string(),
            subject: String::new(),
            message: "Здравствуйте".to_string(),
        }
    }

    #[test]
    fn subject_is_optional() {
        assert!(filled().is_complete());
    }

    #[test]
    fn blank_required_fields_block_sending() {
        let mut draft = filled();
        draft.email = "  ".to_string();
        assert!(!draft.is_complete());

        let mut draft = filled();
        draft.message.clear();
        assert!(!draft.is_complete());
    }
}
