use crate::error::Result;
use crate::model::{ListPostsQuery, PostRequest};
use crate::response::OutcomeResponse;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use quill_core::{Post, PostId};

pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<OutcomeResponse<Vec<Post>>> {
    let outcome = state.posts().list(query.title.as_deref()).await?;
    Ok(outcome.into())
}

pub async fn get_post_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<OutcomeResponse<Post>> {
    let outcome = state.posts().get(PostId::new(id)).await?;
    Ok(outcome.into())
}

pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<OutcomeResponse<Post>> {
    let outcome = state.posts().create(request.into()).await?;
    Ok(outcome.into())
}

pub async fn update_post_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<OutcomeResponse<Post>> {
    let outcome = state
        .posts()
        .update(PostId::new(id), request.into())
        .await?;
    Ok(outcome.into())
}

pub async fn delete_post_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<OutcomeResponse<()>> {
    let outcome = state.posts().delete(PostId::new(id)).await?;
    Ok(outcome.into())
}

pub async fn delete_all_posts_handler(
    State(state): State<AppState>,
) -> Result<OutcomeResponse<()>> {
    let outcome = state.posts().delete_all().await?;
    Ok(outcome.into())
}

pub async fn list_published_posts_handler(
    State(state): State<AppState>,
) -> Result<OutcomeResponse<Vec<Post>>> {
    let outcome = state.posts().list_published().await?;
    Ok(outcome.into())
}
