use axum::{
    Router,
    body::Body,
    http::{
        Request,
        StatusCode,
    },
};
use blogapp::{
    actor::ACTOR_HEADER,
    server::router,
};
use serde_json::{
    Value,
    json,
};
use tower::ServiceExt;

use test_blog::{
    ctrl::create_sqlite_platform,
    sqlite::Fixture,
};

async fn create_app() -> anyhow::Result<(Router, Fixture)> {
    let (platform, fixture) = create_sqlite_platform().await?;
    Ok((router(platform), fixture))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    actor: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri);
    if let Some(actor) = actor {
        builder = builder.header(ACTOR_HEADER, actor);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

#[async_std::test]
async fn test_posts_crud() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, posts) = send(&app, "GET", "/api/posts/", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts.as_array().map(Vec::len), Some(1));
    assert_eq!(posts[0]["title"], "first post");
    assert_eq!(posts[0]["state"], "draft");
    assert_eq!(posts[0]["tags"], json!([{"id": fixture.tag, "name": "rust"}]));

    let (status, post) = send(&app, "POST", "/api/posts/", None, Some(json!({
        "title": "second post",
        "body": "more words",
        "author": fixture.user2,
        "tags": [fixture.tag],
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["author"], fixture.user2);
    assert_eq!(post["state"], "draft");
    let id = post["id"].as_i64().expect("id is an integer");

    let (status, post) = send(&app, "PUT", &format!("/api/posts/{id}/"), None, Some(json!({
        "title": "second post, edited",
        "body": "more words",
        "author": fixture.user2,
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "second post, edited");
    // tags are left alone when not provided
    assert_eq!(post["tags"].as_array().map(Vec::len), Some(1));

    let (status, post) = send(&app, "GET", &format!("/api/posts/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "second post, edited");

    let (status, _) = send(&app, "DELETE", &format!("/api/posts/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/api/posts/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/api/posts/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[async_std::test]
async fn test_posts_invalid() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, body) = send(&app, "POST", "/api/posts/", None, Some(json!({
        "title": "x".repeat(51),
        "body": "body",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "400 Bad Request");

    let (status, _) = send(&app, "POST", "/api/posts/", None, Some(json!({
        "title": "no such author",
        "body": "body",
        "author": 999,
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/posts/", None, Some(json!({
        "title": "no body",
        "body": "",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", "/api/posts/999/", None, Some(json!({
        "title": "missing",
        "body": "body",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[async_std::test]
async fn test_post_transitions() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;
    let base = format!("/api/posts/{}", fixture.post);
    let author = fixture.user.to_string();
    let other = fixture.user2.to_string();

    let (status, names) = send(&app, "GET", &format!("{base}/transitions/"), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, json!(["archive", "draft", "publish"]));
    let (_, names) = send(&app, "GET", &format!("{base}/transitions/"), Some(&other), None).await?;
    assert_eq!(names, json!([]));

    let (status, _) = send(&app, "POST", &format!("{base}/publish/"), None, None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, "POST", &format!("{base}/publish/"), Some("nobody"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "POST", &format!("{base}/publish/"), Some(&other), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, "POST", &format!("{base}/delete/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // an unknown name is rejected before the actor is looked at
    let (status, _) = send(&app, "POST", &format!("{base}/bogus/"), None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // the listing route only answers GET
    let (status, _) = send(&app, "POST", &format!("{base}/transitions/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, post) = send(&app, "POST", &format!("{base}/publish/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["state"], "published");

    // publishing twice is not permitted
    let (status, _) = send(&app, "POST", &format!("{base}/publish/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, post) = send(&app, "POST", &format!("{base}/archive/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["state"], "archived");
    let (_, names) = send(&app, "GET", &format!("{base}/transitions/"), Some(&author), None).await?;
    assert_eq!(names, json!(["draft"]));

    let (status, post) = send(&app, "POST", &format!("{base}/draft/"), Some(&author), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["state"], "draft");

    let (status, _) = send(&app, "POST", "/api/posts/999/publish/", Some(&author), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[async_std::test]
async fn test_comments_crud() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, comment) = send(&app, "POST", "/api/comments/", None, Some(json!({
        "post": fixture.post,
        "body": "agreed",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["post"], fixture.post);
    let id = comment["id"].as_i64().expect("id is an integer");

    let (_, comments) = send(&app, "GET", "/api/comments/", None, None).await?;
    assert_eq!(comments.as_array().map(Vec::len), Some(2));
    let (_, comments) = send(
        &app, "GET", &format!("/api/comments/?post={}", fixture.post), None, None,
    ).await?;
    assert_eq!(comments.as_array().map(Vec::len), Some(2));

    let (status, comment) = send(&app, "PUT", &format!("/api/comments/{id}/"), None, Some(json!({
        "post": fixture.post,
        "body": "agreed, mostly",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["body"], "agreed, mostly");

    let (status, _) = send(&app, "DELETE", &format!("/api/comments/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/api/comments/{id}/"), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/api/comments/", None, Some(json!({
        "post": 999,
        "body": "lost",
        "author": fixture.user,
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[async_std::test]
async fn test_tags_crud() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, tag) = send(&app, "POST", "/api/tags/", None, Some(json!({
        "name": "web",
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = tag["id"].as_i64().expect("id is an integer");

    let (status, _) = send(&app, "POST", "/api/tags/", None, Some(json!({
        "name": "web",
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, tag) = send(&app, "PUT", &format!("/api/tags/{id}/"), None, Some(json!({
        "name": "www",
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tag["name"], "www");

    let (_, tags) = send(&app, "GET", "/api/tags/", None, None).await?;
    assert_eq!(tags.as_array().map(Vec::len), Some(2));

    let (status, _) = send(&app, "DELETE", &format!("/api/tags/{}/", fixture.tag), None, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, post) = send(&app, "GET", &format!("/api/posts/{}/", fixture.post), None, None).await?;
    assert_eq!(post["tags"], json!([]));

    let (status, _) = send(&app, "GET", &format!("/api/tags/{}/", fixture.tag), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[async_std::test]
async fn test_users() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, user) = send(&app, "POST", "/api/users/", None, Some(json!({
        "name": "carol",
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["name"], "carol");

    let (_, users) = send(&app, "GET", "/api/users/", None, None).await?;
    assert_eq!(users.as_array().map(Vec::len), Some(3));

    let (status, user) = send(&app, "GET", &format!("/api/users/{}/", fixture.user), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "alice");

    let (status, _) = send(&app, "GET", "/api/users/999/", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[async_std::test]
async fn test_delete_user() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, _) = send(&app, "DELETE", &format!("/api/users/{}/", fixture.user), None, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/api/users/{}/", fixture.user), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/posts/{}/", fixture.post), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/comments/{}/", fixture.comment), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/users/{}/", fixture.user), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, users) = send(&app, "GET", "/api/users/", None, None).await?;
    assert_eq!(users.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[async_std::test]
async fn test_patch() -> anyhow::Result<()> {
    let (app, fixture) = create_app().await?;

    let (status, post) = send(&app, "PATCH", &format!("/api/posts/{}/", fixture.post), None, Some(json!({
        "title": "patched",
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "patched");
    assert_eq!(post["body"], "hello world");
    assert_eq!(post["author"], fixture.user);
    assert_eq!(post["tags"], json!([{"id": fixture.tag, "name": "rust"}]));

    let (status, post) = send(&app, "PATCH", &format!("/api/posts/{}/", fixture.post), None, Some(json!({
        "tags": [],
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "patched");
    assert_eq!(post["tags"], json!([]));

    let (status, _) = send(&app, "PATCH", &format!("/api/posts/{}/", fixture.post), None, Some(json!({
        "body": " ",
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "PATCH", "/api/posts/999/", None, Some(json!({
        "title": "missing",
    }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, comment) = send(&app, "PATCH", &format!("/api/comments/{}/", fixture.comment), None, Some(json!({
        "body": "very nice post",
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["body"], "very nice post");
    assert_eq!(comment["post"], fixture.post);
    assert_eq!(comment["author"], fixture.user2);

    let (status, tag) = send(&app, "PATCH", &format!("/api/tags/{}/", fixture.tag), None, Some(json!({
        "name": "rustlang",
    }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tag["name"], "rustlang");
    let (status, _) = send(&app, "PATCH", "/api/tags/999/", None, Some(json!({}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
