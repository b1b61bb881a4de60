//! Two-stage submission: store the file(s), then persist the metadata that
//! points at them. Each stage short-circuits the rest on failure.

use super::draft::{SelectedFile, ValidDraft, ValidationError};
use crate::api::{ApiError, MediaApi, SaveMetadataRequest, StoreFileRequest};
use crate::catalog::ContentKind;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("an upload is already in progress")]
    InProgress,
    #[error("the upload dialog is closed")]
    DialogClosed,
    #[error("upload failed: {0}")]
    UploadFailed(ApiError),
    #[error("save failed: {0}")]
    SaveFailed(ApiError),
}

/// Output of the storage stage, fed into the metadata stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMedia {
    pub media_url: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub kind: ContentKind,
    pub title: String,
    pub stored: StoredMedia,
    pub remote_id: Option<u32>,
}

async fn store_one<A: MediaApi>(
    api: &A,
    file: &SelectedFile,
    category: ContentKind,
) -> Result<String, UploadError> {
    let request = StoreFileRequest {
        file: file.to_base64(),
        file_name: file.name.clone(),
        file_type: file.mime.clone(),
        content_type: category,
    };
    api.store_file(&request)
        .await
        .map(|stored| stored.url)
        .map_err(UploadError::UploadFailed)
}

/// Store the media file and, for video, the optional thumbnail.
pub async fn store_media<A: MediaApi>(api: &A, draft: &ValidDraft) -> Result<StoredMedia, UploadError> {
    let media_url = store_one(api, &draft.media_file, draft.kind).await?;
    let thumbnail_url = match (&draft.thumbnail_file, draft.kind) {
        (Some(thumbnail), ContentKind::Video) => {
            Some(store_one(api, thumbnail, ContentKind::Video).await?)
        }
        _ => None,
    };
    Ok(StoredMedia {
        media_url,
        thumbnail_url,
    })
}

pub fn metadata_request(draft: &ValidDraft, stored: &StoredMedia) -> SaveMetadataRequest {
    let (audio_url, video_url) = match draft.kind {
        ContentKind::Audio => (Some(stored.media_url.clone()), None),
        ContentKind::Video => (None, Some(stored.media_url.clone())),
    };
    SaveMetadataRequest {
        content_type: draft.kind,
        title: draft.title.clone(),
        author: draft.author.clone(),
        description: draft.description.clone(),
        duration: draft.duration_label.clone(),
        audio_url,
        video_url,
        thumbnail_url: stored.thumbnail_url.clone(),
    }
}

/// Run the whole submission. Files stored before a metadata failure are
/// left in place.
pub async fn submit_upload<A: MediaApi>(api: &A, draft: &ValidDraft) -> Result<UploadReceipt, UploadError> {
    let stored = match store_media(api, draft).await {
        Ok(stored) => stored,
        Err(err) => {
            warn!(kind = %draft.kind, file = %draft.media_file.name, error = %err, "upload aborted");
            return Err(err);
        }
    };

    let request = metadata_request(draft, &stored);
    let saved = match api.save_metadata(&request).await {
        Ok(saved) => saved,
        Err(err) => {
            // TODO: delete the orphaned file once the storage endpoint supports it.
            warn!(kind = %draft.kind, url = %stored.media_url, error = %err, "metadata save failed after upload");
            return Err(UploadError::SaveFailed(err));
        }
    };

    info!(kind = %draft.kind, title = %draft.title, "upload complete");
    Ok(UploadReceipt {
        kind: draft.kind,
        title: draft.title.clone(),
        stored,
        remote_id: saved.id,
    })
}
