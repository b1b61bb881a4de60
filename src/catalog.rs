//! Content shown on the page: the built-in audio, video and photo entries plus
//! whatever the media listing endpoint returns.

use crate::api::models::RemoteMediaRow;
use crate::playback::{Track, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ids of remotely stored items are shifted by this much so they never clash
/// with built-in entries.
pub const REMOTE_ID_OFFSET: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Audio,
    Video,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioItem {
    pub id: TrackId,
    pub title: String,
    pub author: String,
    pub duration: String,
    pub description: String,
    pub audio_url: Option<String>,
}

impl AudioItem {
    pub fn track(&self) -> Track {
        Track {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            audio_url: self.audio_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoItem {
    pub id: u32,
    pub title: String,
    pub duration: String,
    pub thumbnail: Option<String>,
    pub description: String,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: u32,
    pub src: String,
    pub title: String,
    pub description: String,
}

const CDN: &str = "https://cdn.poehali.dev/projects/23a6611e-5dd1-4bb1-b1a1-0449d1a88e06/files";
const AUTUMN_IMAGE: &str = "f1358683-346a-43d2-bdfa-a59ef02c7f60.jpg";
const WINTER_IMAGE: &str = "93c47059-39cf-45c8-9b2c-9a8e72ca01e0.jpg";
const CRAFT_IMAGE: &str = "94b5573a-e968-47a2-9242-2e10261c4a54.jpg";

fn cdn(file: &str) -> String {
    format!("{CDN}/{file}")
}

/// Image used behind the hero header.
pub fn hero_image() -> String {
    cdn(AUTUMN_IMAGE)
}

fn builtin_audio() -> Vec<AudioItem> {
    let entry = |id: TrackId, title: &str, duration: &str, description: &str| AudioItem {
        id,
        title: title.to_string(),
        author: "Автор произведения".to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        audio_url: Some(format!(
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{id}.mp3"
        )),
    };
    vec![
        entry(1, "Русские просторы", "5:30", "Аудиопроизведение о красоте русской природы"),
        entry(2, "Родные напевы", "4:15", "Традиционные мелодии нашей земли"),
        entry(3, "Голоса предков", "6:45", "Истории и сказания русского народа"),
    ]
}

fn builtin_video() -> Vec<VideoItem> {
    vec![
        VideoItem {
            id: 1,
            title: "Времена года России".to_string(),
            duration: "12:30".to_string(),
            thumbnail: Some(cdn(AUTUMN_IMAGE)),
            description: "Документальный фильм о красоте русской природы".to_string(),
            video_url: None,
        },
        VideoItem {
            id: 2,
            title: "Культурное наследие".to_string(),
            duration: "15:20".to_string(),
            thumbnail: Some(cdn(CRAFT_IMAGE)),
            description: "Обзор традиций и обычаев".to_string(),
            video_url: None,
        },
    ]
}

fn builtin_photos() -> Vec<Photo> {
    let photo = |id: u32, file: &str, title: &str, description: &str| Photo {
        id,
        src: cdn(file),
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        photo(1, AUTUMN_IMAGE, "Золотая осень", "Березовая роща в закатных лучах"),
        photo(2, WINTER_IMAGE, "Зимняя сказка", "Заснеженный лес и деревенька"),
        photo(3, CRAFT_IMAGE, "Народное искусство", "Традиционные узоры хохломы"),
    ]
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    builtin_audio: Vec<AudioItem>,
    builtin_video: Vec<VideoItem>,
    remote_audio: Vec<AudioItem>,
    remote_video: Vec<VideoItem>,
    photos: Vec<Photo>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            builtin_audio: builtin_audio(),
            builtin_video: builtin_video(),
            remote_audio: Vec::new(),
            remote_video: Vec::new(),
            photos: builtin_photos(),
        }
    }
}

impl Catalog {
    /// Built-in entries first, then remote ones in the order the API returned.
    pub fn audio(&self) -> Vec<AudioItem> {
        self.builtin_audio
            .iter()
            .chain(self.remote_audio.iter())
            .cloned()
            .collect()
    }

    pub fn video(&self) -> Vec<VideoItem> {
        self.builtin_video
            .iter()
            .chain(self.remote_video.iter())
            .cloned()
            .collect()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// The audio library as a playlist, in display order.
    pub fn playlist(&self) -> Vec<Track> {
        self.audio().iter().map(AudioItem::track).collect()
    }

    pub fn find_track(&self, id: TrackId) -> Option<Track> {
        self.builtin_audio
            .iter()
            .chain(self.remote_audio.iter())
            .find(|item| item.id == id)
            .map(AudioItem::track)
    }

    /// Replace the remote entries of `kind` with `rows`.
    pub fn replace_remote(&mut self, kind: ContentKind, rows: Vec<RemoteMediaRow>) {
        match kind {
            ContentKind::Audio => {
                self.remote_audio = rows
                    .into_iter()
                    .map(|row| AudioItem {
                        id: REMOTE_ID_OFFSET + row.id,
                        title: row.title,
                        author: row.author.unwrap_or_default(),
                        duration: row.duration.unwrap_or_default(),
                        description: row.description.unwrap_or_default(),
                        audio_url: non_blank(row.audio_url),
                    })
                    .collect();
            }
            ContentKind::Video => {
                self.remote_video = rows
                    .into_iter()
                    .map(|row| VideoItem {
                        id: REMOTE_ID_OFFSET + row.id,
                        title: row.title,
                        duration: row.duration.unwrap_or_default(),
                        thumbnail: non_blank(row.thumbnail_url),
                        description: row.description.unwrap_or_default(),
                        video_url: non_blank(row.video_url),
                    })
                    .collect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, title: &str) -> RemoteMediaRow {
        RemoteMediaRow {
            id,
            title: title.to_string(),
            author: Some("Author".to_string()),
            audio_url: Some(format!("https://cdn.example/audio/{id}.mp3")),
            ..RemoteMediaRow::default()
        }
    }

    #[test]
    fn builtin_playlist_matches_library_order() {
        let catalog = Catalog::default();
        let ids: Vec<_> = catalog.playlist().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.video().len(), 2);
        assert_eq!(catalog.photos().len(), 3);
    }

    #[test]
    fn remote_rows_follow_builtin_entries_without_id_clashes() {
        let mut catalog = Catalog::default();
        catalog.replace_remote(ContentKind::Audio, vec![row(1, "Fresh"), row(2, "Older")]);

        let ids: Vec<_> = catalog.playlist().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 10_001, 10_002]);
        assert_eq!(catalog.find_track(10_001).map(|t| t.title), Some("Fresh".to_string()));
        assert_eq!(catalog.find_track(1).map(|t| t.title), Some("Русские просторы".to_string()));
    }

    #[test]
    fn refresh_replaces_previous_remote_rows() {
        let mut catalog = Catalog::default();
        catalog.replace_remote(ContentKind::Audio, vec![row(1, "Fresh")]);
        catalog.replace_remote(ContentKind::Audio, vec![row(5, "Newer")]);

        assert_eq!(catalog.audio().len(), 4);
        assert!(catalog.find_track(10_001).is_none());
    }

    #[test]
    fn video_rows_keep_blank_urls_out() {
        let mut catalog = Catalog::default();
        catalog.replace_remote(
            ContentKind::Video,
            vec![RemoteMediaRow {
                id: 4,
                title: "Clip".to_string(),
                video_url: Some("https://cdn.example/video/4.mp4".to_string()),
                thumbnail_url: Some(String::new()),
                ..RemoteMediaRow::default()
            }],
        );

        let video = catalog.video();
        let clip = video.last().expect("remote video");
        assert_eq!(clip.id, 10_004);
        assert_eq!(clip.thumbnail, None);
        assert!(clip.video_url.is_some());
        assert_eq!(catalog.audio().len(), 3);
    }

    #[test]
    fn content_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ContentKind::Video).expect("json"), "\"video\"");
    }
}
