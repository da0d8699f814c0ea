use axum::{
    Json,
    extract::{
        Extension,
        Path,
    },
};
use blogcore::tag::{
    Tag,
    TagFields,
    TagPatch,
    Tags,
};
use blogctrl::platform::Platform;
use http::status::StatusCode;

use crate::error::AppError;

pub async fn list_tags(
    platform: Extension<Platform>,
) -> Result<Json<Tags>, AppError> {
    Ok(Json(platform.list_tags().await?))
}

pub async fn create_tag(
    platform: Extension<Platform>,
    Json(fields): Json<TagFields>,
) -> Result<(StatusCode, Json<Tag>), AppError> {
    Ok((StatusCode::CREATED, Json(platform.create_tag(fields).await?)))
}

pub async fn get_tag(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<Json<Tag>, AppError> {
    Ok(Json(platform.get_tag(id).await?))
}

pub async fn update_tag(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(fields): Json<TagFields>,
) -> Result<Json<Tag>, AppError> {
    Ok(Json(platform.update_tag(id, fields).await?))
}

pub async fn patch_tag(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(patch): Json<TagPatch>,
) -> Result<Json<Tag>, AppError> {
    Ok(Json(platform.patch_tag(id, patch).await?))
}

pub async fn delete_tag(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    platform.delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
