//! Playlist navigation over an ordered track list.

pub type TrackId = u32;

/// One playable audio item. Playlist order is navigation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub author: String,
    pub audio_url: Option<String>,
}

impl Track {
    /// Returns the playable source, skipping blank URLs.
    pub fn source(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn position_of(playlist: &[Track], current_id: TrackId) -> Option<usize> {
    playlist.iter().position(|track| track.id == current_id)
}

/// Track immediately after `current_id`, or `None` at the end or when the id
/// is not in the playlist.
pub fn next(playlist: &[Track], current_id: TrackId) -> Option<&Track> {
    let index = position_of(playlist, current_id)?;
    playlist.get(index + 1)
}

/// Track immediately before `current_id`, or `None` at the start or when the
/// id is not in the playlist.
pub fn previous(playlist: &[Track], current_id: TrackId) -> Option<&Track> {
    let index = position_of(playlist, current_id)?;
    index.checked_sub(1).and_then(|prev| playlist.get(prev))
}

#[cfg(test)]
pub(crate) fn track(id: TrackId, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        author: "Author".to_string(),
        audio_url: Some(format!("https://media.example/{id}.mp3")),
    }
}
