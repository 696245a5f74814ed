use crate::db::models::DbDownloadClient;
use crate::db::schema::SQLITE_INIT;
use crate::error::ClientStoreError;
use crate::types::{DownloadClient, UNSAVED_ID};
use sqlx::{Pool, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

const SELECT_ALL: &str = r#"SELECT id, name, type, enabled, host, port, ssl,
    username, password, settings FROM client"#;

const SELECT_BY_ID: &str = r#"SELECT id, name, type, enabled, host, port, ssl,
    username, password, settings FROM client WHERE id = ?"#;

/// Which path `ClientStore::upsert` took.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// New row written; the client carries the assigned id.
    Inserted(DownloadClient),
    /// Update issued by id. Zero matched rows is not distinguished.
    Updated(DownloadClient),
    /// Insert hit a uniqueness constraint and wrote nothing; id left unchanged.
    Conflict(DownloadClient),
}

impl UpsertOutcome {
    pub fn into_client(self) -> DownloadClient {
        match self {
            Self::Inserted(c) | Self::Updated(c) | Self::Conflict(c) => c,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

/// Data access for the `client` table. Holds only the pool handle, so it is
/// cheap to clone and safe to share across tasks. Never logs; every failure
/// is returned to the caller.
#[derive(Clone)]
pub struct ClientStore {
    pool: SqlitePool,
}

impl ClientStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ClientStoreError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All rows in storage order. One undecodable row fails the whole call.
    pub async fn list(&self) -> Result<Vec<DownloadClient>, ClientStoreError> {
        let rows = sqlx::query_as::<_, DbDownloadClient>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(DownloadClient::try_from).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<DownloadClient, ClientStoreError> {
        let row = sqlx::query_as::<_, DbDownloadClient>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ClientStoreError::NotFound(id))?;
        DownloadClient::try_from(row)
    }

    /// Insert when `client.id` is unset, otherwise overwrite the row by id.
    /// An insert rejected by a uniqueness constraint returns the client as
    /// given (id still 0); use [`ClientStore::upsert`] to observe that case.
    pub async fn store(&self, client: DownloadClient) -> Result<DownloadClient, ClientStoreError> {
        self.upsert(client).await.map(UpsertOutcome::into_client)
    }

    pub async fn upsert(&self, client: DownloadClient) -> Result<UpsertOutcome, ClientStoreError> {
        let row = DbDownloadClient::encode(&client)?;
        if client.id == UNSAVED_ID {
            self.insert(client, row).await
        } else {
            self.update(&row).await?;
            Ok(UpsertOutcome::Updated(client))
        }
    }

    async fn insert(
        &self,
        mut client: DownloadClient,
        row: DbDownloadClient,
    ) -> Result<UpsertOutcome, ClientStoreError> {
        let res = sqlx::query(
            r#"
            INSERT INTO client (
                name, type, enabled, host, port, ssl, username, password, settings
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(row.name)
        .bind(row.client_type)
        .bind(row.enabled)
        .bind(row.host)
        .bind(row.port)
        .bind(row.ssl)
        .bind(row.username)
        .bind(row.password)
        .bind(row.settings)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Ok(UpsertOutcome::Conflict(client));
        }
        client.id = res.last_insert_rowid();
        Ok(UpsertOutcome::Inserted(client))
    }

    async fn update(&self, row: &DbDownloadClient) -> Result<(), ClientStoreError> {
        sqlx::query(
            r#"UPDATE client SET
                name = ?,
                type = ?,
                enabled = ?,
                host = ?,
                port = ?,
                ssl = ?,
                username = ?,
                password = ?,
                settings = ?
              WHERE id = ?"#,
        )
        .bind(row.name.as_str())
        .bind(row.client_type.as_str())
        .bind(row.enabled)
        .bind(row.host.as_str())
        .bind(row.port)
        .bind(row.ssl)
        .bind(row.username.as_str())
        .bind(row.password.as_str())
        .bind(row.settings.as_deref())
        .bind(row.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete by id. Deleting a missing id is a successful no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ClientStoreError> {
        sqlx::query("DELETE FROM client WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
