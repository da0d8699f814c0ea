use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use blogctrl::platform::Platform;

pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

/// The JSON API, mounted under `/api`.
pub fn router(platform: Platform) -> Router {
    let api = Router::new()
        .route("/posts/", get(post::list_posts).post(post::create_post))
        .route(
            "/posts/{id}/",
            get(post::get_post)
                .put(post::update_post)
                .patch(post::patch_post)
                .delete(post::delete_post),
        )
        .route("/posts/{id}/transitions/", get(post::post_transitions))
        .route("/posts/{id}/{transition}/", axum::routing::post(post::transition_post))
        .route("/comments/", get(comment::list_comments).post(comment::create_comment))
        .route(
            "/comments/{id}/",
            get(comment::get_comment)
                .put(comment::update_comment)
                .patch(comment::patch_comment)
                .delete(comment::delete_comment),
        )
        .route("/tags/", get(tag::list_tags).post(tag::create_tag))
        .route(
            "/tags/{id}/",
            get(tag::get_tag)
                .put(tag::update_tag)
                .patch(tag::patch_tag)
                .delete(tag::delete_tag),
        )
        .route("/users/", get(user::list_users).post(user::create_user))
        .route("/users/{id}/", get(user::get_user).delete(user::delete_user));

    Router::new()
        .nest("/api", api)
        .layer(Extension(platform))
}
