use crate::comments::{CommentBoard, ThreadKey};
use crate::components::Icon;
use chrono::Local;
use dioxus::prelude::*;
use tracing::debug;

/// Comments for one audio or video card, with the form for adding one.
#[component]
pub fn CommentThread(thread: ThreadKey) -> Element {
    let mut board = use_context::<Signal<CommentBoard>>();

    let comments = board.read().thread(thread).to_vec();
    let draft = board.read().draft(thread);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let today = Local::now().date_naive();
        if board.write().submit_draft(thread, today) {
            debug!(kind = %thread.kind, id = thread.id, "comment added");
        }
    };

    rsx! {
        div { class: "mt-6 border-t border-zinc-200 pt-4 space-y-4",
            h4 { class: "flex items-center gap-2 font-semibold",
                Icon { name: "message".to_string(), class: "w-4 h-4".to_string() }
                "Комментарии ({comments.len()})"
            }
            if !comments.is_empty() {
                ul { class: "space-y-3",
                    for (index, comment) in comments.iter().enumerate() {
                        li { key: "{index}", class: "rounded-md bg-zinc-100 p-3",
                            div { class: "flex items-baseline justify-between gap-2 mb-1",
                                span { class: "font-medium text-sm", "{comment.author}" }
                                span { class: "text-xs text-zinc-500", "{comment.submitted_at}" }
                            }
                            p { class: "text-sm text-zinc-700 whitespace-pre-wrap", "{comment.text}" }
                        }
                    }
                }
            }
            form { class: "space-y-2", onsubmit: on_submit,
                input {
                    class: "w-full rounded-md border border-zinc-300 px-3 py-2 text-sm",
                    placeholder: "Ваше имя",
                    value: "{draft.author}",
                    oninput: move |evt: FormEvent| board.write().set_draft_author(thread, evt.value()),
                }
                textarea {
                    class: "w-full rounded-md border border-zinc-300 px-3 py-2 text-sm",
                    rows: "3",
                    placeholder: "Ваш комментарий...",
                    value: "{draft.text}",
                    oninput: move |evt: FormEvent| board.write().set_draft_text(thread, evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "inline-flex items-center gap-2 rounded-md bg-amber-700 px-4 py-2 text-sm font-medium text-white hover:bg-amber-800 transition-colors",
                    Icon { name: "send".to_string(), class: "w-4 h-4".to_string() }
                    "Отправить"
                }
            }
        }
    }
}
