//! Member registration and authentication.

use crate::app::error::{require_text, store_err, ServiceError, ServiceResult};
use crate::crypto::{hash_password_blocking, verify_password_blocking};
use crate::domain::model::{MemberCredentials, MemberSummary};
use crate::storage::{Store, StoreError};

#[derive(Clone, Debug)]
pub struct AccountService {
    store: Store,
}

impl AccountService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Registers a member and returns the new id.
    ///
    /// The email uniqueness check is left to the store's constraint, so two racing
    /// registrations for one address resolve to exactly one success.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ServiceResult<i64> {
        require_text("name", name)?;
        require_text("email", email)?;
        require_text("password", password)?;

        let password_hash = hash_password_blocking(password).await?;

        let result = sqlx::query("INSERT INTO miembros(nombre, email, password) VALUES(?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(&password_hash)
            .execute(self.store.pool())
            .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                tracing::info!(member_id = id, "member registered");
                Ok(id)
            }
            Err(e) => match StoreError::from(e) {
                StoreError::UniqueViolation(_) => Err(ServiceError::DuplicateEmail),
                other => Err(ServiceError::Store(other)),
            },
        }
    }

    /// Checks credentials and returns the member's id and name.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<MemberSummary> {
        require_text("email", email)?;
        require_text("password", password)?;

        let member: MemberCredentials = sqlx::query_as(
            "SELECT id, nombre AS name, password AS password_hash FROM miembros WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.store.pool())
        .await
        .map_err(store_err)?
        .ok_or(ServiceError::NotFound)?;

        if !verify_password_blocking(password, &member.password_hash).await {
            return Err(ServiceError::Auth);
        }

        Ok(MemberSummary {
            id: member.id,
            name: member.name,
        })
    }

    /// Exact, case-sensitive lookup by display name. The oldest match wins.
    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Option<MemberSummary>> {
        sqlx::query_as("SELECT id, nombre AS name FROM miembros WHERE nombre = ? ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(self.store.pool())
            .await
            .map_err(store_err)
    }
}
