use axum::{
    Json,
    extract::{
        Extension,
        Path,
        Query,
    },
};
use blogcore::comment::{
    Comment,
    CommentFields,
    CommentPatch,
    Comments,
};
use blogctrl::platform::Platform;
use http::status::StatusCode;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct CommentFilter {
    post: Option<i64>,
}

pub async fn list_comments(
    platform: Extension<Platform>,
    Query(filter): Query<CommentFilter>,
) -> Result<Json<Comments>, AppError> {
    let comments = match filter.post {
        Some(post_id) => platform.list_comments_for_post(post_id).await?,
        None => platform.list_comments().await?,
    };
    Ok(Json(comments))
}

pub async fn create_comment(
    platform: Extension<Platform>,
    Json(fields): Json<CommentFields>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    Ok((StatusCode::CREATED, Json(platform.create_comment(fields).await?)))
}

pub async fn get_comment(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(platform.get_comment(id).await?))
}

pub async fn update_comment(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(fields): Json<CommentFields>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(platform.update_comment(id, fields).await?))
}

pub async fn patch_comment(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(patch): Json<CommentPatch>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(platform.patch_comment(id, patch).await?))
}

pub async fn delete_comment(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    platform.delete_comment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
