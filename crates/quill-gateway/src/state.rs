use std::sync::Arc;

use quill_core::PostManager;

#[derive(Clone)]
pub struct AppState {
    posts: Arc<dyn PostManager>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostManager>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &dyn PostManager {
        self.posts.as_ref()
    }
}
