use quill_core::PostDraft;
use serde::Deserialize;

/// Body of create and update requests.
///
/// Missing fields fall back to their defaults. A client-supplied `id` is
/// ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl From<PostRequest> for PostDraft {
    fn from(request: PostRequest) -> Self {
        PostDraft {
            title: request.title,
            description: request.description,
            published: request.published,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub title: Option<String>,
}
