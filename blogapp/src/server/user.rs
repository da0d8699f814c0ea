use axum::{
    Json,
    extract::{
        Extension,
        Path,
    },
};
use blogcore::user::{
    User,
    UserFields,
};
use blogctrl::platform::Platform;
use http::status::StatusCode;

use crate::error::AppError;

pub async fn list_users(
    platform: Extension<Platform>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(platform.list_users().await?))
}

pub async fn create_user(
    platform: Extension<Platform>,
    Json(fields): Json<UserFields>,
) -> Result<(StatusCode, Json<User>), AppError> {
    Ok((StatusCode::CREATED, Json(platform.create_user(fields).await?)))
}

pub async fn get_user(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(platform.get_user(id).await?))
}

pub async fn delete_user(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    platform.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
