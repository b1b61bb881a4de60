//! In-memory comment threads, one per audio or video item.

use crate::catalog::ContentKind;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Date convention used for comment stamps (`15.10.2026`).
pub const COMMENT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadKey {
    pub kind: ContentKind,
    pub id: u32,
}

impl ThreadKey {
    pub fn new(kind: ContentKind, id: u32) -> Self {
        Self { kind, id }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub submitted_at: String,
}

/// Unsent comment fields for one thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub author: String,
    pub text: String,
}

/// All comment threads on the page plus their pending drafts.
///
/// Lives for the lifetime of the page; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentBoard {
    threads: HashMap<ThreadKey, Vec<Comment>>,
    drafts: HashMap<ThreadKey, CommentDraft>,
}

impl CommentBoard {
    pub fn thread(&self, key: ThreadKey) -> &[Comment] {
        self.threads.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn draft(&self, key: ThreadKey) -> CommentDraft {
        self.drafts.get(&key).cloned().unwrap_or_default()
    }

    pub fn set_draft_author(&mut self, key: ThreadKey, author: String) {
        self.drafts.entry(key).or_default().author = author;
    }

    pub fn set_draft_text(&mut self, key: ThreadKey, text: String) {
        self.drafts.entry(key).or_default().text = text;
    }

    /// Append a comment to the thread for `key`.
    ///
    /// Silently ignored unless both fields are non-blank. On success the
    /// draft for `key` is cleared. Returns whether the comment was added.
    pub fn add_comment(&mut self, key: ThreadKey, author: &str, text: &str, today: NaiveDate) -> bool {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return false;
        }

        self.threads.entry(key).or_default().push(Comment {
            author: author.to_string(),
            text: text.to_string(),
            submitted_at: today.format(COMMENT_DATE_FORMAT).to_string(),
        });
        self.drafts.insert(key, CommentDraft::default());
        true
    }

    /// Submit whatever is in the draft for `key`.
    pub fn submit_draft(&mut self, key: ThreadKey, today: NaiveDate) -> bool {
        let draft = self.draft(key);
        self.add_comment(key, &draft.author, &draft.text, today)
    }
}
