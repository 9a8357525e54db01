//! SQLite-backed persistence store.
//!
//! Owns the connection pool and the schema of the four feed tables:
//! `miembros` (members), `publicaciones` (posts), `comentarios` (post comments)
//! and `comentarios_sobre_mi` (profile comments). Table and column names match the
//! database files written by earlier versions of the server.

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;

/// Errors surfaced by the store. Engine messages are carried verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::UniqueViolation(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                StoreError::ForeignKeyViolation(db_err.message().to_string())
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}

const CREATE_MEMBERS: &str = "CREATE TABLE IF NOT EXISTS miembros(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT,
    email TEXT UNIQUE,
    password TEXT
)";

const CREATE_POSTS: &str = "CREATE TABLE IF NOT EXISTS publicaciones(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    usuario_id INTEGER,
    contenido TEXT,
    fecha TEXT,
    FOREIGN KEY(usuario_id) REFERENCES miembros(id)
)";

const CREATE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comentarios(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    usuario_id INTEGER,
    publicacion_id INTEGER,
    comentario TEXT,
    fecha TEXT,
    FOREIGN KEY(usuario_id) REFERENCES miembros(id),
    FOREIGN KEY(publicacion_id) REFERENCES publicaciones(id)
)";

const CREATE_PROFILE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comentarios_sobre_mi(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    usuario_id INTEGER,
    comentario TEXT,
    fecha TEXT,
    FOREIGN KEY(usuario_id) REFERENCES miembros(id)
)";

/// Cloneable handle to the database. Clones share one pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connects to the database at `url` (e.g. `sqlite:database.sqlite?mode=rwc`).
    ///
    /// Does not create tables; call [`Store::init_schema`] afterwards.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// A private in-memory database with the schema already applied.
    ///
    /// Uses a single long-lived connection so the database lives as long as the store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the four tables if they are missing. Safe to run on every start.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        for ddl in [
            CREATE_MEMBERS,
            CREATE_POSTS,
            CREATE_COMMENTS,
            CREATE_PROFILE_COMMENTS,
        ] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Cheap liveness probe used by the health endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Current UTC time in the `YYYY-MM-DD HH:MM:SS` form stored in `fecha` columns.
pub fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    async fn insert_member(store: &Store, name: &str, email: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO miembros(nombre, email, password) VALUES(?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind("hash")
            .execute(store.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let store = Store::in_memory().await.unwrap();
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(store.pool())
        .await
        .unwrap();
        let names: Vec<String> = rows.iter().map(|r| r.get("name")).collect();
        assert_eq!(
            names,
            vec!["comentarios", "comentarios_sobre_mi", "miembros", "publicaciones"]
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let store = Store::in_memory().await.unwrap();
        insert_member(&store, "Ana", "ana@x.com").await.unwrap();

        let err = insert_member(&store, "Otra", "ana@x.com").await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn dangling_author_is_a_foreign_key_violation() {
        let store = Store::in_memory().await.unwrap();
        let err: StoreError = sqlx::query(
            "INSERT INTO publicaciones(usuario_id, contenido, fecha) VALUES(?, ?, ?)",
        )
        .bind(42_i64)
        .bind("hola")
        .bind(now_timestamp())
        .execute(store.pool())
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, StoreError::ForeignKeyViolation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = Store::in_memory().await.unwrap();
        let first = insert_member(&store, "A", "a@x.com").await.unwrap();
        sqlx::query("DELETE FROM miembros WHERE id = ?")
            .bind(first)
            .execute(store.pool())
            .await
            .unwrap();
        let second = insert_member(&store, "B", "b@x.com").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn file_store_persists_across_reconnects() {
        let path = std::env::temp_dir().join(format!(
            "social-feed-store-{}-{}.sqlite",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let url = format!("sqlite:{}?mode=rwc", path.display());

        {
            let store = Store::connect(&url, 2).await.unwrap();
            store.init_schema().await.unwrap();
            insert_member(&store, "Ana", "ana@x.com").await.unwrap();
            store.pool().close().await;
        }

        let store = Store::connect(&url, 2).await.unwrap();
        store.init_schema().await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM miembros")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
        store.pool().close().await;

        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[test]
    fn timestamp_has_sqlite_datetime_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
