use crate::api::models::*;
use crate::catalog::ContentKind;
use crate::config::PortalConfig;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, info, warn};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}

/// Remote storage and metadata endpoints the portal talks to.
#[allow(async_fn_in_trait)]
pub trait MediaApi {
    /// Store one file and return its public URL.
    async fn store_file(&self, request: &StoreFileRequest) -> Result<StoredFile, ApiError>;

    async fn save_metadata(&self, request: &SaveMetadataRequest)
        -> Result<SavedMetadata, ApiError>;

    /// Stored items of `kind`, newest first.
    async fn list_media(&self, kind: ContentKind) -> Result<Vec<RemoteMediaRow>, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpMediaApi {
    store_file_endpoint: String,
    media_api_endpoint: String,
}

impl HttpMediaApi {
    pub fn new(store_file_endpoint: impl Into<String>, media_api_endpoint: impl Into<String>) -> Self {
        Self {
            store_file_endpoint: store_file_endpoint.into(),
            media_api_endpoint: media_api_endpoint.into(),
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(
            config.store_file_endpoint.clone(),
            config.media_api_endpoint.clone(),
        )
    }
}

async fn error_for_status(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        });
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

impl MediaApi for HttpMediaApi {
    async fn store_file(&self, request: &StoreFileRequest) -> Result<StoredFile, ApiError> {
        debug!(
            file = %request.file_name,
            mime = %request.file_type,
            category = %request.content_type,
            encoded_len = request.file.len(),
            "storing file"
        );

        let response = HTTP_CLIENT
            .post(&self.store_file_endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let err = error_for_status(response).await;
            warn!(file = %request.file_name, error = %err, "file upload rejected");
            return Err(err);
        }

        let stored: StoredFile = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if stored.url.trim().is_empty() {
            return Err(ApiError::Parse("store response carried no url".to_string()));
        }

        info!(file = %request.file_name, url = %stored.url, "file stored");
        Ok(stored)
    }

    async fn save_metadata(
        &self,
        request: &SaveMetadataRequest,
    ) -> Result<SavedMetadata, ApiError> {
        let response = HTTP_CLIENT
            .post(&self.media_api_endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let err = error_for_status(response).await;
            warn!(title = %request.title, error = %err, "metadata save rejected");
            return Err(err);
        }

        // The body is informational only; a success status is what counts.
        let saved = response.json::<SavedMetadata>().await.unwrap_or_default();
        info!(
            kind = %request.content_type,
            title = %request.title,
            id = ?saved.id,
            "metadata saved"
        );
        Ok(saved)
    }

    async fn list_media(&self, kind: ContentKind) -> Result<Vec<RemoteMediaRow>, ApiError> {
        let response = HTTP_CLIENT
            .get(&self.media_api_endpoint)
            .query(&[("type", kind.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let rows: Vec<RemoteMediaRow> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!(kind = %kind, count = rows.len(), "listed remote media");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpMediaApi {
        HttpMediaApi::new(
            format!("{}/store", server.uri()),
            format!("{}/media", server.uri()),
        )
    }

    fn store_request() -> StoreFileRequest {
        StoreFileRequest {
            file: "aGVsbG8=".to_string(),
            file_name: "song.mp3".to_string(),
            file_type: "audio/mpeg".to_string(),
            content_type: ContentKind::Audio,
        }
    }

    #[tokio::test]
    async fn store_file_posts_json_and_returns_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/store"))
            .and(body_json(serde_json::json!({
                "file": "aGVsbG8=",
                "fileName": "song.mp3",
                "fileType": "audio/mpeg",
                "contentType": "audio",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "url": "https://cdn.example/audio/abc.mp3",
                "fileName": "song.mp3",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stored = api_for(&server)
            .store_file(&store_request())
            .await
            .expect("stored");
        assert_eq!(stored.url, "https://cdn.example/audio/abc.mp3");
    }

    #[tokio::test]
    async fn store_file_surfaces_server_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/store"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Missing required fields"})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server)
            .store_file(&store_request())
            .await
            .expect_err("rejected");
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Missing required fields".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn store_file_without_url_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/store"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": ""})))
            .mount(&server)
            .await;

        let err = api_for(&server)
            .store_file(&store_request())
            .await
            .expect_err("no url");
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn save_metadata_accepts_created_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/media"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"success": true, "id": 12})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = SaveMetadataRequest {
            content_type: ContentKind::Audio,
            title: "Song".to_string(),
            author: Some("Author".to_string()),
            description: String::new(),
            duration: "3:10".to_string(),
            audio_url: Some("https://cdn.example/audio/abc.mp3".to_string()),
            video_url: None,
            thumbnail_url: None,
        };
        let saved = api_for(&server).save_metadata(&request).await.expect("saved");
        assert_eq!(saved.id, Some(12));
    }

    #[tokio::test]
    async fn save_metadata_failure_uses_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/media"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let request = SaveMetadataRequest {
            content_type: ContentKind::Video,
            title: "Clip".to_string(),
            author: None,
            description: String::new(),
            duration: String::new(),
            audio_url: None,
            video_url: Some("https://cdn.example/video/1.mp4".to_string()),
            thumbnail_url: None,
        };
        let err = api_for(&server)
            .save_metadata(&request)
            .await
            .expect_err("rejected");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn list_media_queries_by_kind() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media"))
            .and(query_param("type", "video"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 3, "title": "Clip", "video_url": "https://cdn.example/video/3.mp4",
                 "thumbnail_url": null, "created_at": "2024-05-01 10:00:00"}
            ])))
            .mount(&server)
            .await;

        let rows = api_for(&server)
            .list_media(ContentKind::Video)
            .await
            .expect("listed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].video_url.as_deref(), Some("https://cdn.example/video/3.mp4"));
    }
}
