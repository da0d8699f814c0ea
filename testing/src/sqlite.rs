use blogcore::{
    comment::traits::CommentBackend,
    platform::PlatformConnector,
    post::traits::PostBackend,
    tag::traits::TagBackend,
    user::traits::UserBackend,
};
use blogdb_sqlite::SqliteBackend;

/// Ids of the records written by `create_sqlite_fixture`.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    /// The author of `post`.
    pub user: i64,
    /// A second user that authored nothing.
    pub user2: i64,
    /// A draft post titled "first post".
    pub post: i64,
    /// A tag named "rust" linked to `post`.
    pub tag: i64,
    /// A comment by `user2` on `post`.
    pub comment: i64,
}

pub async fn create_sqlite_backend() -> anyhow::Result<SqliteBackend> {
    SqliteBackend::blog("sqlite::memory:".into())
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn create_sqlite_fixture() -> anyhow::Result<(SqliteBackend, Fixture)> {
    let backend = create_sqlite_backend().await?;
    let user = backend.add_user("alice").await?;
    let user2 = backend.add_user("bob").await?;
    let post = backend.add_post("first post", "hello world", user).await?;
    let tag = backend.add_tag("rust").await?;
    backend.set_post_tags(post, &[tag]).await?;
    let comment = backend.add_comment(post, "nice post", user2).await?;
    Ok((backend, Fixture { user, user2, post, tag, comment }))
}
