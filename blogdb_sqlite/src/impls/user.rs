use async_trait::async_trait;
use blogcore::{
    error::BackendError,
    user::{
        User,
        traits::UserBackend,
    },
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn user_from_row(row: SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_ts: row.try_get("created_ts")?,
    })
}

async fn add_user_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let id = sqlx::query(
        r#"
INSERT INTO 'user' (
    name,
    created_ts
)
VALUES ( ?1, ?2 )
        "#,
    )
    .bind(name)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_user_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<User>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    'user'
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .try_map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(rec)
}

async fn get_user_by_name_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Option<User>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    'user'
WHERE
    name = ?1
        "#,
    )
    .bind(name)
    .try_map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(rec)
}

async fn list_users_sqlite(
    backend: &SqliteBackend,
) -> Result<Vec<User>, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    'user'
ORDER BY
    id
        "#,
    )
    .try_map(user_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn delete_user_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
DELETE FROM
    'user'
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
impl UserBackend for SqliteBackend {
    async fn add_user(
        &self,
        name: &str,
    ) -> Result<i64, BackendError> {
        add_user_sqlite(
            &self,
            name,
        ).await
    }

    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_id_sqlite(
            &self,
            id,
        ).await
    }

    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_name_sqlite(
            &self,
            name,
        ).await
    }

    async fn list_users(
        &self,
    ) -> Result<Vec<User>, BackendError> {
        list_users_sqlite(&self).await
    }

    async fn delete_user(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        delete_user_sqlite(&self, id).await
    }
}
