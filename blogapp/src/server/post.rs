use axum::{
    Json,
    extract::{
        Extension,
        Path,
    },
};
use blogcore::post::{
    Post,
    PostFields,
    PostPatch,
    Posts,
};
use blogctrl::platform::Platform;
use http::status::StatusCode;

use crate::{
    actor::Actor,
    error::AppError,
};

pub async fn list_posts(
    platform: Extension<Platform>,
) -> Result<Json<Posts>, AppError> {
    Ok(Json(platform.list_posts().await?))
}

pub async fn create_post(
    platform: Extension<Platform>,
    Json(fields): Json<PostFields>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    Ok((StatusCode::CREATED, Json(platform.create_post(fields).await?)))
}

pub async fn get_post(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, AppError> {
    Ok(Json(platform.get_post(id).await?))
}

pub async fn update_post(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(fields): Json<PostFields>,
) -> Result<Json<Post>, AppError> {
    Ok(Json(platform.update_post(id, fields).await?))
}

pub async fn patch_post(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
    Json(patch): Json<PostPatch>,
) -> Result<Json<Post>, AppError> {
    Ok(Json(platform.patch_post(id, patch).await?))
}

pub async fn delete_post(
    platform: Extension<Platform>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    platform.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Transitions the actor may fire on the post; every transition
/// permitted from the current state for an anonymous request.
pub async fn post_transitions(
    platform: Extension<Platform>,
    actor: Actor,
    Path(id): Path<i64>,
) -> Result<Json<Vec<&'static str>>, AppError> {
    Ok(Json(platform.post_transitions(id, actor.0).await?))
}

pub async fn transition_post(
    platform: Extension<Platform>,
    actor: Actor,
    Path((id, transition)): Path<(i64, String)>,
) -> Result<Json<Post>, AppError> {
    // an unknown transition is a bad request whoever is asking
    if platform.lifecycle().transition(&transition).is_none() {
        log::warn!("post {id}: unknown transition {transition:?} requested");
        Err(AppError::BadRequest)?
    }
    let actor = actor.required()?;
    Ok(Json(platform.transition_post(id, &transition, actor).await?))
}
