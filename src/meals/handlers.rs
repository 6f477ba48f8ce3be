use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use bytes::Bytes;
use tracing::instrument;

use crate::error::AppError;
use crate::session::SessionToken;
use crate::state::AppState;

use super::dto::{CommentResponse, CreateMealRequest, DeleteQuery, DeleteResponse, LikeResponse};
use super::store::MealRecord;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals", get(list_meals))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal).delete(delete_meal_by_query))
        .route("/meals/:id", delete(delete_meal))
        .route("/meals/:id/like", post(like_meal))
        .route("/meals/:id/comment", post(comment_meal))
}

#[instrument(skip(state))]
async fn list_meals(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<Vec<MealRecord>>, AppError> {
    let meals = state.sessions.with(token, |s| s.meals.list().to_vec())?;
    Ok(Json(meals))
}

/// POST /meals. The image (if any) is persisted first; a storage failure
/// reports 500 and leaves the session's store untouched.
#[instrument(skip(state, body))]
async fn create_meal(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(mut body): Json<CreateMealRequest>,
) -> Result<(StatusCode, HeaderMap, Json<MealRecord>), AppError> {
    let image_url = match body.image.take() {
        Some(buf) => {
            let content_type = body.image_content_type.as_deref().unwrap_or("image/jpeg");
            state
                .images
                .put(Bytes::from(buf.into_vec()), content_type)
                .await?
        }
        None => state.config.placeholder_image_url.clone(),
    };

    let new = body.into_new_meal(image_url);
    let record = state.sessions.with(token, |s| s.meals.add(new).clone())?;
    tracing::debug!(id = record.id, "meal shared");

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::LOCATION,
        format!("/api/v1/meals/{}", record.id).parse().unwrap(),
    );

    Ok((StatusCode::CREATED, headers, Json(record)))
}

#[instrument(skip(state))]
async fn delete_meal(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.sessions.with(token, |s| s.meals.delete(id))?;
    Ok(Json(DeleteResponse { deleted }))
}

/// DELETE /meals?delete=<id>, the query-parameter transport. Same semantics
/// as the path form: unknown ids are a no-op, not an error.
#[instrument(skip(state))]
async fn delete_meal_by_query(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Query(q): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.sessions.with(token, |s| s.meals.delete(q.delete))?;
    Ok(Json(DeleteResponse { deleted }))
}

#[instrument(skip(state))]
async fn like_meal(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<u64>,
) -> Result<Json<LikeResponse>, AppError> {
    let likes = state
        .sessions
        .with(token, |s| s.meals.like(id))?
        .ok_or_else(|| AppError::NotFound(format!("meal {id} not found")))?;
    Ok(Json(LikeResponse { id, likes }))
}

#[instrument(skip(state))]
async fn comment_meal(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(id): Path<u64>,
) -> Result<Json<CommentResponse>, AppError> {
    let comments = state
        .sessions
        .with(token, |s| s.meals.comment(id))?
        .ok_or_else(|| AppError::NotFound(format!("meal {id} not found")))?;
    Ok(Json(CommentResponse { id, comments }))
}
