use async_trait::async_trait;
use blogcore::{
    comment::{
        Comment,
        Comments,
        traits::CommentBackend,
    },
    error::BackendError,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn comment_from_row(row: SqliteRow) -> Result<Comment, sqlx::Error> {
    Ok(Comment {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        body: row.try_get("body")?,
        author_id: row.try_get("author_id")?,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
    })
}

async fn add_comment_sqlite(
    backend: &SqliteBackend,
    post_id: i64,
    body: &str,
    author_id: i64,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let id = sqlx::query(
        r#"
INSERT INTO comment (
    post_id,
    body,
    author_id,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?4 )
        "#,
    )
    .bind(post_id)
    .bind(body)
    .bind(author_id)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_comment_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<Comment>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    post_id,
    body,
    author_id,
    created_ts,
    updated_ts
FROM
    comment
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(comment_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(rec)
}

async fn list_comments_sqlite(
    backend: &SqliteBackend,
) -> Result<Comments, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    post_id,
    body,
    author_id,
    created_ts,
    updated_ts
FROM
    comment
ORDER BY
    id
        "#,
    )
    .try_map(comment_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs.into())
}

async fn list_comments_for_post_sqlite(
    backend: &SqliteBackend,
    post_id: i64,
) -> Result<Comments, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    post_id,
    body,
    author_id,
    created_ts,
    updated_ts
FROM
    comment
WHERE
    post_id = ?1
ORDER BY
    id
        "#,
    )
    .bind(post_id)
    .try_map(comment_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs.into())
}

async fn update_comment_sqlite(
    backend: &SqliteBackend,
    id: i64,
    post_id: i64,
    body: &str,
    author_id: i64,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    comment
SET
    post_id = ?1,
    body = ?2,
    author_id = ?3,
    updated_ts = ?4
WHERE
    id = ?5"#,
    )
    .bind(post_id)
    .bind(body)
    .bind(author_id)
    .bind(ts)
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_comment_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
DELETE FROM
    comment
WHERE
    id = ?1"#,
    )
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl CommentBackend for SqliteBackend {
    async fn add_comment(
        &self,
        post_id: i64,
        body: &str,
        author_id: i64,
    ) -> Result<i64, BackendError> {
        add_comment_sqlite(
            &self,
            post_id,
            body,
            author_id,
        ).await
    }

    async fn get_comment_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Comment>, BackendError> {
        get_comment_by_id_sqlite(&self, id).await
    }

    async fn list_comments(
        &self,
    ) -> Result<Comments, BackendError> {
        list_comments_sqlite(&self).await
    }

    async fn list_comments_for_post(
        &self,
        post_id: i64,
    ) -> Result<Comments, BackendError> {
        list_comments_for_post_sqlite(&self, post_id).await
    }

    async fn update_comment(
        &self,
        id: i64,
        post_id: i64,
        body: &str,
        author_id: i64,
    ) -> Result<bool, BackendError> {
        update_comment_sqlite(
            &self,
            id,
            post_id,
            body,
            author_id,
        ).await
    }

    async fn delete_comment(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_comment_sqlite(&self, id).await
    }
}
