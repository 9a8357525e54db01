//! Posts on the shared feed.

use crate::app::error::{require_id, require_text, store_err, ServiceResult};
use crate::domain::model::PostView;
use crate::storage::{now_timestamp, Store};

#[derive(Clone, Debug)]
pub struct FeedService {
    store: Store,
}

impl FeedService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Publishes a post stamped with the current server time.
    pub async fn create_post(&self, author_id: i64, content: &str) -> ServiceResult<i64> {
        require_id("author_id", author_id)?;
        require_text("content", content)?;

        let done = sqlx::query(
            "INSERT INTO publicaciones(usuario_id, contenido, fecha) VALUES(?, ?, ?)",
        )
        .bind(author_id)
        .bind(content)
        .bind(now_timestamp())
        .execute(self.store.pool())
        .await
        .map_err(store_err)?;

        Ok(done.last_insert_rowid())
    }

    /// Every post, newest first.
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostView>> {
        sqlx::query_as(
            "SELECT publicaciones.id AS id,
                    publicaciones.contenido AS content,
                    publicaciones.fecha AS created_at,
                    miembros.nombre AS author_name
             FROM publicaciones
             JOIN miembros ON publicaciones.usuario_id = miembros.id
             ORDER BY publicaciones.id DESC",
        )
        .fetch_all(self.store.pool())
        .await
        .map_err(store_err)
    }
}
