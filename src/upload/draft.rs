use crate::catalog::ContentKind;
use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// A file picked in the dialog, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// `reported_mime` is whatever the browser supplied; blank values fall
    /// back to a guess from the extension.
    pub fn new(name: impl Into<String>, reported_mime: Option<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = reported_mime
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| mime_from_extension(&name).to_string());
        Self { name, mime, bytes }
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }
}

fn mime_from_extension(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("choose a file to upload")]
    MissingFile,
    #[error("title is required")]
    MissingTitle,
    #[error("author is required for audio")]
    MissingAuthor,
}

/// Form state of an open upload dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub duration_label: String,
    pub media_file: Option<SelectedFile>,
    pub thumbnail_file: Option<SelectedFile>,
}

/// A draft that passed validation. Only this can be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub kind: ContentKind,
    pub title: String,
    pub author: Option<String>,
    pub description: String,
    pub duration_label: String,
    pub media_file: SelectedFile,
    pub thumbnail_file: Option<SelectedFile>,
}

impl UploadDraft {
    pub fn validate(&self, kind: ContentKind) -> Result<ValidDraft, ValidationError> {
        let media_file = self.media_file.clone().ok_or(ValidationError::MissingFile)?;
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let author = match kind {
            ContentKind::Audio => {
                let author = self.author.trim();
                if author.is_empty() {
                    return Err(ValidationError::MissingAuthor);
                }
                Some(author.to_string())
            }
            ContentKind::Video => None,
        };
        let thumbnail_file = match kind {
            ContentKind::Video => self.thumbnail_file.clone(),
            ContentKind::Audio => None,
        };

        Ok(ValidDraft {
            kind,
            title: title.to_string(),
            author,
            description: self.description.clone(),
            duration_label: self.duration_label.clone(),
            media_file,
            thumbnail_file,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, None, b"hello".to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio_draft() -> UploadDraft {
        UploadDraft {
            title: "Song".to_string(),
            author: "Author".to_string(),
            media_file: Some(sample_file("song.mp3")),
            ..UploadDraft::default()
        }
    }

    #[test]
    fn file_is_required_first() {
        let draft = UploadDraft::default();
        assert_eq!(draft.validate(ContentKind::Audio), Err(ValidationError::MissingFile));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = audio_draft();
        draft.title = "   ".to_string();
        assert_eq!(draft.validate(ContentKind::Audio), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn author_only_required_for_audio() {
        let mut draft = audio_draft();
        draft.author.clear();
        assert_eq!(draft.validate(ContentKind::Audio), Err(ValidationError::MissingAuthor));

        let valid = draft.validate(ContentKind::Video).expect("video needs no author");
        assert_eq!(valid.author, None);
    }

    #[test]
    fn thumbnail_only_kept_for_video() {
        let mut draft = audio_draft();
        draft.thumbnail_file = Some(sample_file("cover.jpg"));

        assert!(draft.validate(ContentKind::Audio).expect("valid").thumbnail_file.is_none());
        assert!(draft.validate(ContentKind::Video).expect("valid").thumbnail_file.is_some());
    }

    #[test]
    fn fields_are_trimmed() {
        let mut draft = audio_draft();
        draft.title = "  Song ".to_string();
        draft.author = " Author  ".to_string();
        let valid = draft.validate(ContentKind::Audio).expect("valid");
        assert_eq!(valid.title, "Song");
        assert_eq!(valid.author.as_deref(), Some("Author"));
    }

    #[test]
    fn mime_prefers_reported_type() {
        let file = SelectedFile::new("clip.bin", Some("video/mp4".to_string()), Vec::new());
        assert_eq!(file.mime, "video/mp4");
        assert_eq!(SelectedFile::new("Cover.JPG", Some(String::new()), Vec::new()).mime, "image/jpeg");
        assert_eq!(SelectedFile::new("noext", None, Vec::new()).mime, "application/octet-stream");
    }

    #[test]
    fn base64_payload_is_standard_encoding() {
        assert_eq!(sample_file("a.mp3").to_base64(), "aGVsbG8=");
    }
}
