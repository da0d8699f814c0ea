use async_trait::async_trait;
use blogcore::{
    error::BackendError,
    tag::{
        Tag,
        Tags,
        traits::TagBackend,
    },
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::SqliteBackend;

fn tag_from_row(row: SqliteRow) -> Result<Tag, sqlx::Error> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

async fn add_tag_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<i64, BackendError> {
    let id = sqlx::query(
        r#"
INSERT INTO tag (
    name
)
VALUES ( ?1 )
        "#,
    )
    .bind(name)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_tag_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<Tag>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    name
FROM
    tag
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(tag_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(rec)
}

async fn list_tags_sqlite(
    backend: &SqliteBackend,
) -> Result<Tags, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name
FROM
    tag
ORDER BY
    id
        "#,
    )
    .try_map(tag_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs.into())
}

async fn update_tag_sqlite(
    backend: &SqliteBackend,
    id: i64,
    name: &str,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
UPDATE
    tag
SET
    name = ?1
WHERE
    id = ?2"#,
    )
    .bind(name)
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_tag_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
DELETE FROM
    tag
WHERE
    id = ?1"#,
    )
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected();
    Ok(rows_affected > 0)
}

async fn set_post_tags_sqlite(
    backend: &SqliteBackend,
    post_id: i64,
    tag_ids: &[i64],
) -> Result<(), BackendError> {
    let mut tx = backend.pool.begin().await?;
    sqlx::query(r#"
DELETE FROM
    post_tag
WHERE
    post_id = ?1"#,
    )
    .bind(post_id)
    .execute(&mut *tx)
    .await?;
    for tag_id in tag_ids {
        sqlx::query(r#"
INSERT OR IGNORE INTO post_tag (
    post_id,
    tag_id
)
VALUES ( ?1, ?2 )
            "#,
        )
        .bind(post_id)
        .bind(*tag_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}

async fn get_tags_for_post_sqlite(
    backend: &SqliteBackend,
    post_id: i64,
) -> Result<Tags, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    tag.id AS id,
    tag.name AS name
FROM
    tag
JOIN
    post_tag ON post_tag.tag_id = tag.id
WHERE
    post_tag.post_id = ?1
ORDER BY
    tag.id
        "#,
    )
    .bind(post_id)
    .try_map(tag_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs.into())
}

#[async_trait]
impl TagBackend for SqliteBackend {
    async fn add_tag(
        &self,
        name: &str,
    ) -> Result<i64, BackendError> {
        add_tag_sqlite(&self, name).await
    }

    async fn get_tag_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Tag>, BackendError> {
        get_tag_by_id_sqlite(&self, id).await
    }

    async fn list_tags(
        &self,
    ) -> Result<Tags, BackendError> {
        list_tags_sqlite(&self).await
    }

    async fn update_tag(
        &self,
        id: i64,
        name: &str,
    ) -> Result<bool, BackendError> {
        update_tag_sqlite(&self, id, name).await
    }

    async fn delete_tag(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_tag_sqlite(&self, id).await
    }

    async fn set_post_tags(
        &self,
        post_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), BackendError> {
        set_post_tags_sqlite(&self, post_id, tag_ids).await
    }

    async fn get_tags_for_post(
        &self,
        post_id: i64,
    ) -> Result<Tags, BackendError> {
        get_tags_for_post_sqlite(&self, post_id).await
    }
}
