use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_post_handler, delete_all_posts_handler, delete_post_handler, get_post_handler,
    health_handler, list_posts_handler, list_published_posts_handler, update_post_handler,
};
use crate::error::CorsError;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route(
                        "/posts",
                        get(list_posts_handler)
                            .post(create_post_handler)
                            .delete(delete_all_posts_handler),
                    )
                    .route("/posts/published", get(list_published_posts_handler))
                    .route(
                        "/posts/{id}",
                        get(get_post_handler)
                            .put(update_post_handler)
                            .delete(delete_post_handler),
                    ),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Allows cross-origin calls from exactly one origin.
    ///
    /// The wildcard `*` is rejected: it would open the API to every origin.
    pub fn cors(allowed_origin: &str) -> Result<CorsLayer, CorsError> {
        let origin = allowed_origin.trim();
        if origin.is_empty() {
            return Err(CorsError::Empty);
        }
        if origin == "*" {
            return Err(CorsError::Wildcard);
        }
        let origin = HeaderValue::from_str(origin)
            .map_err(|_| CorsError::InvalidOrigin(allowed_origin.to_string()))?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]))
    }
}
