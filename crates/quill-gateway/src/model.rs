mod health;
mod post;

pub use health::HealthResponse;
pub use post::{ListPostsQuery, PostRequest};
