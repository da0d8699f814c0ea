use async_trait::async_trait;
use blogcore::{
    error::{
        BackendError,
        ValueError,
    },
    post::{
        Post,
        Posts,
        traits::PostBackend,
    },
    workflow::State,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn post_from_row(row: SqliteRow) -> Result<Post, sqlx::Error> {
    let state = row.try_get::<String, _>("state")?
        .parse::<State>()
        .map_err(|e: ValueError| sqlx::Error::Decode(Box::new(e)))?;
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        author_id: row.try_get("author_id")?,
        state,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        tags: None,
    })
}

async fn add_post_sqlite(
    backend: &SqliteBackend,
    title: &str,
    body: &str,
    author_id: i64,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    // state is left to the column default
    let id = sqlx::query(
        r#"
INSERT INTO post (
    title,
    body,
    author_id,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?4 )
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(author_id)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_post_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<Post>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    title,
    body,
    author_id,
    state,
    created_ts,
    updated_ts
FROM
    post
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(post_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(rec)
}

async fn list_posts_sqlite(
    backend: &SqliteBackend,
) -> Result<Posts, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    title,
    body,
    author_id,
    state,
    created_ts,
    updated_ts
FROM
    post
ORDER BY
    id
        "#,
    )
    .try_map(post_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs.into())
}

async fn update_post_sqlite(
    backend: &SqliteBackend,
    id: i64,
    title: &str,
    body: &str,
    author_id: i64,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    post
SET
    title = ?1,
    body = ?2,
    author_id = ?3,
    updated_ts = ?4
WHERE
    id = ?5"#,
    )
    .bind(title)
    .bind(body)
    .bind(author_id)
    .bind(ts)
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn set_post_state_sqlite(
    backend: &SqliteBackend,
    id: i64,
    expected: State,
    state: State,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    post
SET
    state = ?1,
    updated_ts = ?2
WHERE
    id = ?3
    AND state = ?4"#,
    )
    .bind(<&'static str>::from(state))
    .bind(ts)
    .bind(id)
    .bind(<&'static str>::from(expected))
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_post_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
DELETE FROM
    post
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
impl PostBackend for SqliteBackend {
    async fn add_post(
        &self,
        title: &str,
        body: &str,
        author_id: i64,
    ) -> Result<i64, BackendError> {
        add_post_sqlite(
            &self,
            title,
            body,
            author_id,
        ).await
    }

    async fn get_post_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Post>, BackendError> {
        get_post_by_id_sqlite(&self, id).await
    }

    async fn list_posts(
        &self,
    ) -> Result<Posts, BackendError> {
        list_posts_sqlite(&self).await
    }

    async fn update_post(
        &self,
        id: i64,
        title: &str,
        body: &str,
        author_id: i64,
    ) -> Result<bool, BackendError> {
        update_post_sqlite(
            &self,
            id,
            title,
            body,
            author_id,
        ).await
    }

    async fn set_post_state(
        &self,
        id: i64,
        expected: State,
        state: State,
    ) -> Result<bool, BackendError> {
        set_post_state_sqlite(
            &self,
            id,
            expected,
            state,
        ).await
    }

    async fn delete_post(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_post_sqlite(&self, id).await
    }
}
