use crate::catalog::{Catalog, ContentKind};
use crate::components::{refresh_catalog, use_media_api, Icon, ToastController};
use crate::upload::{submit_upload, SelectedFile, UploadDialog, UploadDraft, UploadError};
use dioxus::prelude::*;
use tracing::warn;

const FIELD: &str = "w-full rounded-md border border-zinc-300 px-3 py-2 text-sm";
const LABEL: &str = "block text-sm font-medium mb-1";

fn kind_word(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Audio => "аудио",
        ContentKind::Video => "видео",
    }
}

fn kind_title(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Audio => "Аудио",
        ContentKind::Video => "Видео",
    }
}

fn file_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Audio => "Аудиофайл",
        ContentKind::Video => "Видеофайл",
    }
}

fn accepted_types(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Audio => "audio/*",
        ContentKind::Video => "video/*",
    }
}

fn unreadable_file_message(name: &str) -> String {
    format!("Не удалось прочитать файл «{name}». Выберите его ещё раз.")
}

/// Read the first file of a file input change. `Err` carries the file name.
async fn selected_file(evt: &FormEvent) -> Result<Option<SelectedFile>, String> {
    let Some(file) = evt.files().into_iter().next() else {
        return Ok(None);
    };
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => Ok(Some(SelectedFile::new(name, file.content_type(), bytes.to_vec()))),
        Err(err) => {
            warn!(file = %name, error = %err, "could not read selected file");
            Err(name)
        }
    }
}

/// "Upload" button plus the modal dialog it opens.
#[component]
pub fn UploadButton(kind: ContentKind) -> Element {
    let mut dialog = use_signal(|| UploadDialog::new(kind));
    let toasts = use_context::<ToastController>();
    let catalog = use_context::<Signal<Catalog>>();
    let api = use_media_api();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let valid = match dialog.write().begin_submit() {
            Ok(valid) => valid,
            Err(UploadError::Validation(err)) => {
                toasts.error("Ошибка", err.to_string());
                return;
            }
            Err(_) => return,
        };

        let api = api.clone();
        spawn(async move {
            let outcome = submit_upload(&api, &valid).await;
            dialog.write().finish(&outcome);
            match outcome {
                Ok(receipt) => {
                    let title = kind_title(receipt.kind);
                    toasts.success("Успешно!", format!("{title} «{}» успешно загружено", receipt.title));
                    refresh_catalog(api, catalog, receipt.kind).await;
                }
                Err(err) => toasts.error("Ошибка", err.to_string()),
            }
        });
    };

    let state = dialog.read().clone();
    let draft: UploadDraft = state.draft().clone();
    let submitting = state.is_submitting();
    let word = kind_word(kind);

    rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center gap-2 rounded-md border border-amber-700 px-4 py-2 text-sm font-medium text-amber-800 hover:bg-amber-50 transition-colors",
            onclick: move |_| dialog.write().open(),
            Icon { name: "upload".to_string(), class: "w-4 h-4".to_string() }
            "Загрузить {word}"
        }

        if state.is_open() {
            div { class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4",
                form {
                    class: "w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-xl bg-white p-6 shadow-xl space-y-4",
                    onsubmit: on_submit,
                    div {
                        h3 { class: "text-xl font-semibold", "Загрузить {word}" }
                        p { class: "text-sm text-zinc-500",
                            "Заполните информацию и выберите файл для загрузки"
                        }
                    }

                    if let Some(error) = state.error() {
                        p { class: "rounded-md bg-red-50 px-3 py-2 text-sm text-red-800", "{error}" }
                    }

                    div {
                        label { class: LABEL, r#for: "upload-title-{kind}", "Название *" }
                        input {
                            id: "upload-title-{kind}",
                            class: FIELD,
                            placeholder: "Введите название",
                            value: "{draft.title}",
                            disabled: submitting,
                            oninput: move |evt: FormEvent| dialog.write().edit(|d| d.title = evt.value()),
                        }
                    }

                    if kind == ContentKind::Audio {
                        div {
                            label { class: LABEL, r#for: "upload-author-{kind}", "Автор *" }
                            input {
                                id: "upload-author-{kind}",
                                class: FIELD,
                                placeholder: "Введите имя автора",
                                value: "{draft.author}",
                                disabled: submitting,
                                oninput: move |evt: FormEvent| dialog.write().edit(|d| d.author = evt.value()),
                            }
                        }
                    }

                    div {
                        label { class: LABEL, r#for: "upload-description-{kind}", "Описание" }
                        textarea {
                            id: "upload-description-{kind}",
                            class: FIELD,
                            rows: "3",
                            placeholder: "Добавьте описание",
                            value: "{draft.description}",
                            disabled: submitting,
                            oninput: move |evt: FormEvent| dialog.write().edit(|d| d.description = evt.value()),
                        }
                    }

                    div {
                        label { class: LABEL, r#for: "upload-duration-{kind}", "Длительность (например: 5:30)" }
                        input {
                            id: "upload-duration-{kind}",
                            class: FIELD,
                            placeholder: "0:00",
                            value: "{draft.duration_label}",
                            disabled: submitting,
                            oninput: move |evt: FormEvent| dialog.write().edit(|d| d.duration_label = evt.value()),
                        }
                    }

                    div {
                        label { class: LABEL, r#for: "upload-file-{kind}", "{file_label(kind)} *" }
                        input {
                            id: "upload-file-{kind}",
                            r#type: "file",
                            class: "w-full text-sm",
                            accept: accepted_types(kind),
                            disabled: submitting,
                            onchange: move |evt: FormEvent| async move {
                                match selected_file(&evt).await {
                                    Ok(Some(file)) => dialog.write().edit(|d| d.media_file = Some(file)),
                                    Ok(None) => {}
                                    Err(name) => toasts.error("Ошибка", unreadable_file_message(&name)),
                                }
                            },
                        }
                        if let Some(file) = draft.media_file.as_ref() {
                            p { class: "mt-1 text-xs text-zinc-500", "Выбран файл: {file.name}" }
                        }
                    }

                    if kind == ContentKind::Video {
                        div {
                            label { class: LABEL, r#for: "upload-thumbnail", "Обложка видео (необязательно)" }
                            input {
                                id: "upload-thumbnail",
                                r#type: "file",
                                class: "w-full text-sm",
                                accept: "image/*",
                                disabled: submitting,
                                onchange: move |evt: FormEvent| async move {
                                    match selected_file(&evt).await {
                                        Ok(Some(file)) => dialog.write().edit(|d| d.thumbnail_file = Some(file)),
                                        Ok(None) => {}
                                        Err(name) => toasts.error("Ошибка", unreadable_file_message(&name)),
                                    }
                                },
                            }
                            if let Some(file) = draft.thumbnail_file.as_ref() {
                                p { class: "mt-1 text-xs text-zinc-500", "Выбран файл: {file.name}" }
                            }
                        }
                    }

                    div { class: "flex gap-2 pt-2",
                        button {
                            r#type: "submit",
                            class: "flex-1 inline-flex items-center justify-center gap-2 rounded-md bg-amber-700 px-4 py-2 text-sm font-medium text-white hover:bg-amber-800 disabled:opacity-60 transition-colors",
                            disabled: submitting,
                            if submitting {
                                Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                                "Загрузка..."
                            } else {
                                Icon { name: "upload".to_string(), class: "w-4 h-4".to_string() }
                                "Загрузить"
                            }
                        }
                        button {
                            r#type: "button",
                            class: "rounded-md border border-zinc-300 px-4 py-2 text-sm hover:bg-zinc-50 disabled:opacity-60 transition-colors",
                            disabled: submitting,
                            onclick: move |_| {
                                dialog.write().close();
                            },
                            "Отмена"
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

    #[test]
    fn unreadable_file_message_names_the_file() {
        let message = unreadable_file_message("гимн.mp3");
        assert!(message.contains("«гимн.mp3»"));
    }
}
