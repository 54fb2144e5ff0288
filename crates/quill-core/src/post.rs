use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post as held by the store.
///
/// `id` is `None` until the record has been saved for the first time; the
/// store assigns it exactly once and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl Post {
    /// Creates an unsaved post.
    pub fn new(title: impl Into<String>, description: impl Into<String>, published: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// Returns a copy of this post carrying the given id.
    pub fn with_id(self, id: PostId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Overwrites every mutable field with the draft's values.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.published = draft.published;
    }
}

/// Client-supplied fields for creating or replacing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub published: bool,
}
