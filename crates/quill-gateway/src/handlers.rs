mod health;
mod post;

pub use health::health_handler;
pub use post::{
    create_post_handler, delete_all_posts_handler, delete_post_handler, get_post_handler,
    list_posts_handler, list_published_posts_handler, update_post_handler,
};
