use blogcore::{
    comment::{
        CommentFields,
        CommentPatch,
    },
    error::TransitionError,
    post::{
        Post,
        PostFields,
        PostPatch,
    },
    tag::{
        TagFields,
        TagPatch,
    },
    user::UserFields,
    workflow::State,
};
use blogctrl::{
    error::{
        CtrlError,
        PlatformError,
    },
    platform::Platform,
};
use mockall::predicate::*;
use std::sync::Arc;

use test_blog::{
    core::MockPlatform,
    ctrl::create_sqlite_platform,
};

fn post_fields(author_id: i64, title: &str) -> PostFields {
    PostFields {
        title: title.to_string(),
        body: "some body".to_string(),
        author_id,
        tags: None,
    }
}

#[async_std::test]
async fn test_platform_is_send_sync() -> anyhow::Result<()> {
    let (platform, _) = create_sqlite_platform().await?;
    test_blog::is_send_sync(&platform);
    Ok(())
}

#[async_std::test]
async fn test_create_get_post() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let post = platform.create_post(PostFields {
        tags: Some(vec![fixture.tag]),
        ..post_fields(fixture.user2, "second post")
    }).await?;
    assert_eq!(post.state, State::Draft);
    assert_eq!(post.author_id, fixture.user2);
    assert_eq!(post.tags()?.len(), 1);
    assert_eq!(post.tags()?[0].name, "rust");

    let posts = platform.list_posts().await?;
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|post| post.tags.is_some()));
    Ok(())
}

#[async_std::test]
async fn test_create_post_validation() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let long_title = "x".repeat(51);
    assert!(matches!(
        platform.create_post(post_fields(fixture.user, &long_title)).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("title", _))),
    ));
    assert!(matches!(
        platform.create_post(post_fields(fixture.user, " ")).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("title", _))),
    ));
    assert!(matches!(
        platform.create_post(PostFields {
            body: "".to_string(),
            ..post_fields(fixture.user, "no body")
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("body", _))),
    ));
    assert!(matches!(
        platform.update_post(fixture.post, PostFields {
            body: "\n".to_string(),
            ..post_fields(fixture.user, "no body")
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("body", _))),
    ));
    assert!(matches!(
        platform.create_post(post_fields(999, "orphan")).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("author", _))),
    ));
    assert!(matches!(
        platform.create_post(PostFields {
            tags: Some(vec![999]),
            ..post_fields(fixture.user, "tagged")
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("tags", _))),
    ));
    assert_eq!(platform.list_posts().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn test_update_delete_post() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let post = platform.update_post(fixture.post, PostFields {
        tags: Some(vec![]),
        ..post_fields(fixture.user, "renamed")
    }).await?;
    assert_eq!(post.title, "renamed");
    assert!(post.tags()?.is_empty());

    assert!(matches!(
        platform.update_post(fixture.post, post_fields(fixture.user2, "taken over")).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("author", _))),
    ));
    assert!(matches!(
        platform.update_post(999, post_fields(fixture.user, "missing")).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", 999))),
    ));

    platform.delete_post(fixture.post).await?;
    assert!(matches!(
        platform.get_post(fixture.post).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", _))),
    ));
    assert!(matches!(
        platform.delete_post(fixture.post).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", _))),
    ));
    // comments go with the post, the tag stays
    assert!(platform.list_comments().await?.is_empty());
    assert_eq!(platform.list_tags().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn test_transition_post() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;

    let post = platform.transition_post(fixture.post, "publish", fixture.user).await?;
    assert_eq!(post.state, State::Published);
    assert_eq!(platform.get_post(fixture.post).await?.state, State::Published);
    assert_eq!(
        platform.post_transitions(fixture.post, Some(fixture.user)).await?,
        ["archive", "draft"],
    );

    let post = platform.transition_post(fixture.post, "archive", fixture.user).await?;
    assert_eq!(post.state, State::Archived);
    assert_eq!(platform.post_transitions(fixture.post, None).await?, ["draft"]);

    let post = platform.transition_post(fixture.post, "draft", fixture.user).await?;
    assert_eq!(post.state, State::Draft);
    Ok(())
}

#[async_std::test]
async fn test_transition_post_rejected() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;

    assert!(matches!(
        platform.transition_post(fixture.post, "publish", fixture.user2).await,
        Err(PlatformError::TransitionError(TransitionError::TransitionNotAllowed { .. })),
    ));
    assert!(matches!(
        platform.transition_post(fixture.post, "delete", fixture.user).await,
        Err(PlatformError::TransitionError(TransitionError::UnknownTransition(_))),
    ));
    assert!(matches!(
        platform.transition_post(999, "publish", fixture.user).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", 999))),
    ));
    assert_eq!(platform.get_post(fixture.post).await?.state, State::Draft);
    assert!(platform.post_transitions(fixture.post, Some(fixture.user2)).await?
        .is_empty());
    Ok(())
}

#[async_std::test]
async fn test_transition_post_conflict() -> anyhow::Result<()> {
    let mut mock = MockPlatform::new();
    mock.expect_get_post_by_id()
        .times(1)
        .with(eq(1))
        .returning(|id| Ok(Some(Post {
            id,
            title: "post".to_string(),
            author_id: 7,
            ..Default::default()
        })));
    mock.expect_set_post_state()
        .times(1)
        .with(eq(1), eq(State::Draft), eq(State::Published))
        .returning(|_, _, _| Ok(false));
    let platform = Platform::new(Arc::new(mock));

    assert!(matches!(
        platform.transition_post(1, "publish", 7).await,
        Err(PlatformError::CtrlError(CtrlError::Conflict(1))),
    ));
    Ok(())
}

#[async_std::test]
async fn test_comments() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let comment = platform.create_comment(CommentFields {
        post_id: fixture.post,
        body: "another".to_string(),
        author_id: fixture.user,
    }).await?;
    assert_eq!(platform.list_comments_for_post(fixture.post).await?.len(), 2);

    let comment = platform.update_comment(comment.id, CommentFields {
        post_id: comment.post_id,
        body: "edited".to_string(),
        author_id: comment.author_id,
    }).await?;
    assert_eq!(comment.body, "edited");

    assert!(matches!(
        platform.create_comment(CommentFields {
            post_id: 999,
            body: "lost".to_string(),
            author_id: fixture.user,
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("post", _))),
    ));
    assert!(matches!(
        platform.list_comments_for_post(999).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", 999))),
    ));

    platform.delete_comment(fixture.comment).await?;
    assert_eq!(platform.list_comments().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn test_tags() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let tag = platform.create_tag(TagFields { name: "web".to_string() }).await?;
    assert!(matches!(
        platform.create_tag(TagFields { name: "web".to_string() }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("name", _))),
    ));
    assert!(matches!(
        platform.create_tag(TagFields { name: "x".repeat(31) }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("name", _))),
    ));

    let tags = platform.set_post_tags(fixture.post, &[fixture.tag, tag.id]).await?;
    assert_eq!(tags.len(), 2);

    // renaming to its own name is fine
    platform.update_tag(tag.id, TagFields { name: "web".to_string() }).await?;
    assert!(matches!(
        platform.update_tag(tag.id, TagFields { name: "rust".to_string() }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("name", _))),
    ));

    platform.delete_tag(fixture.tag).await?;
    let post = platform.get_post(fixture.post).await?;
    assert_eq!(post.tags()?.len(), 1);
    assert_eq!(post.tags()?[0].name, "web");
    Ok(())
}

#[async_std::test]
async fn test_users() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    let user = platform.create_user(UserFields { name: "carol".to_string() }).await?;
    assert_eq!(platform.get_user_by_name("carol").await?, Some(user));
    assert!(matches!(
        platform.create_user(UserFields { name: "alice".to_string() }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("name", _))),
    ));
    assert_eq!(platform.get_user(fixture.user).await?.name, "alice");
    assert_eq!(platform.list_users().await?.len(), 3);
    Ok(())
}

#[async_std::test]
async fn test_delete_user() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;
    platform.delete_user(fixture.user).await?;
    assert!(matches!(
        platform.get_user(fixture.user).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("user", _))),
    ));
    assert!(matches!(
        platform.delete_user(fixture.user).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("user", _))),
    ));
    // the post by the deleted user went, along with the comment on it
    assert!(platform.list_posts().await?.is_empty());
    assert!(platform.list_comments().await?.is_empty());
    assert_eq!(platform.list_tags().await?.len(), 1);
    assert_eq!(platform.list_users().await?.len(), 1);
    Ok(())
}

#[async_std::test]
async fn test_patch() -> anyhow::Result<()> {
    let (platform, fixture) = create_sqlite_platform().await?;

    let post = platform.patch_post(fixture.post, PostPatch {
        title: Some("patched".to_string()),
        ..Default::default()
    }).await?;
    assert_eq!(post.title, "patched");
    assert_eq!(post.body, "hello world");
    assert_eq!(post.tags()?.len(), 1);
    assert!(matches!(
        platform.patch_post(fixture.post, PostPatch {
            body: Some(" ".to_string()),
            ..Default::default()
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("body", _))),
    ));
    assert!(matches!(
        platform.patch_post(fixture.post, PostPatch {
            author_id: Some(fixture.user2),
            ..Default::default()
        }).await,
        Err(PlatformError::CtrlError(CtrlError::Invalid("author", _))),
    ));
    assert!(matches!(
        platform.patch_post(999, PostPatch::default()).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("post", 999))),
    ));

    let comment = platform.patch_comment(fixture.comment, CommentPatch {
        body: Some("very nice post".to_string()),
        ..Default::default()
    }).await?;
    assert_eq!(comment.body, "very nice post");
    assert_eq!(comment.author_id, fixture.user2);

    let tag = platform.patch_tag(fixture.tag, TagPatch {
        name: Some("rustlang".to_string()),
    }).await?;
    assert_eq!(tag.name, "rustlang");
    assert!(matches!(
        platform.patch_tag(999, TagPatch::default()).await,
        Err(PlatformError::CtrlError(CtrlError::NotFound("tag", 999))),
    ));
    Ok(())
}
