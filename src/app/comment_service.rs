//! Comments on posts and comments left on member profiles.
//!
//! Profile comments record only their author. There is no target member column, so
//! [`CommentService::list_profile_comments`] returns every profile comment in the system.

use crate::app::error::{require_id, require_text, store_err, ServiceResult};
use crate::domain::model::CommentView;
use crate::storage::{now_timestamp, Store};

#[derive(Clone, Debug)]
pub struct CommentService {
    store: Store,
}

impl CommentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_comment(
        &self,
        author_id: i64,
        post_id: i64,
        text: &str,
    ) -> ServiceResult<i64> {
        require_id("author_id", author_id)?;
        require_id("post_id", post_id)?;
        require_text("text", text)?;

        let done = sqlx::query(
            "INSERT INTO comentarios(usuario_id, publicacion_id, comentario, fecha) VALUES(?, ?, ?, ?)",
        )
        .bind(author_id)
        .bind(post_id)
        .bind(text)
        .bind(now_timestamp())
        .execute(self.store.pool())
        .await
        .map_err(store_err)?;

        Ok(done.last_insert_rowid())
    }

    /// Comments on one post, newest first. Unknown posts simply have none.
    pub async fn list_comments_for_post(&self, post_id: i64) -> ServiceResult<Vec<CommentView>> {
        sqlx::query_as(
            "SELECT comentarios.id AS id,
                    comentarios.comentario AS text,
                    comentarios.fecha AS created_at,
                    miembros.nombre AS author_name
             FROM comentarios
             JOIN miembros ON comentarios.usuario_id = miembros.id
             WHERE comentarios.publicacion_id = ?
             ORDER BY comentarios.id DESC",
        )
        .bind(post_id)
        .fetch_all(self.store.pool())
        .await
        .map_err(store_err)
    }

    pub async fn create_profile_comment(&self, author_id: i64, text: &str) -> ServiceResult<i64> {
        require_id("author_id", author_id)?;
        require_text("text", text)?;

        let done = sqlx::query(
            "INSERT INTO comentarios_sobre_mi(usuario_id, comentario, fecha) VALUES(?, ?, ?)",
        )
        .bind(author_id)
        .bind(text)
        .bind(now_timestamp())
        .execute(self.store.pool())
        .await
        .map_err(store_err)?;

        Ok(done.last_insert_rowid())
    }

    /// All profile comments system-wide, newest first.
    pub async fn list_profile_comments(&self) -> ServiceResult<Vec<CommentView>> {
        sqlx::query_as(
            "SELECT comentarios_sobre_mi.id AS id,
                    comentarios_sobre_mi.comentario AS text,
                    comentarios_sobre_mi.fecha AS created_at,
                    miembros.nombre AS author_name
             FROM comentarios_sobre_mi
             JOIN miembros ON comentarios_sobre_mi.usuario_id = miembros.id
             ORDER BY comentarios_sobre_mi.id DESC",
        )
        .fetch_all(self.store.pool())
        .await
        .map_err(store_err)
    }
}
