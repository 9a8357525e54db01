use crate::app::ServiceError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

// Messages shown verbatim by the client application.
pub const MSG_MISSING_FIELDS: &str = "Faltan datos";
pub const MSG_DUPLICATE_EMAIL: &str = "Ese correo ya está registrado";
pub const MSG_REGISTER_STORE_FAILURE: &str = "Error base datos";
pub const MSG_LOGIN_STORE_FAILURE: &str = "Error BD";
pub const MSG_UNKNOWN_MEMBER: &str = "Usuario no encontrado";
pub const MSG_WRONG_PASSWORD: &str = "Contraseña incorrecta";

/// Failures the caller cannot fix by changing the request.
pub fn is_server_fault(err: &ServiceError) -> bool {
    matches!(err, ServiceError::Hashing(_) | ServiceError::Store(_))
}

/// Short, stable name of the error class for log fields.
pub fn error_class(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Validation(_) => "validation",
        ServiceError::DuplicateEmail => "duplicate_email",
        ServiceError::NotFound => "not_found",
        ServiceError::Auth => "auth",
        ServiceError::Hashing(_) => "hashing",
        ServiceError::Store(_) => "store",
    }
}

/// Logs a service failure at a level matching its class.
pub fn log_failure(operation: &str, err: &ServiceError) {
    let class = error_class(err);
    if is_server_fault(err) {
        tracing::error!(%operation, %class, error = %err, "request failed");
    } else {
        tracing::warn!(%operation, %class, error = %err, "request rejected");
    }
}

/// Envelope failures are reported in the body; the status stays 200 as the client expects.
pub fn envelope_failure(body: ApiResponse) -> (StatusCode, Json<ApiResponse>) {
    (StatusCode::OK, Json(body))
}

/// Logs a failed write and turns it into the bare `{success:false}` envelope.
pub fn write_failure(operation: &str, err: ServiceError) -> (StatusCode, Json<ApiResponse>) {
    log_failure(operation, &err);
    envelope_failure(ApiResponse::failed())
}

/// Unparsable, non-JSON or untyped bodies get the same envelope as a missing field.
pub fn json_rejected(
    operation: &str,
    err: JsonRejection,
    message: Option<&str>,
) -> (StatusCode, Json<ApiResponse>) {
    tracing::warn!(%operation, class = "validation", error = %err, "invalid JSON body");
    let body = match message {
        Some(m) => ApiResponse::failed_with(m),
        None => ApiResponse::failed(),
    };
    envelope_failure(body)
}

/// List endpoints never fail outward: errors are logged and an empty list is returned.
pub fn degrade_to_empty<T, U: From<T>>(operation: &str, result: Result<Vec<T>, ServiceError>) -> Vec<U> {
    match result {
        Ok(rows) => rows.into_iter().map(U::from).collect(),
        Err(err) => {
            tracing::error!(%operation, error = %err, "listing failed, returning empty result");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostView;
    use crate::storage::StoreError;
    use crate::transport::http::types::PostItem;

    #[test]
    fn only_store_and_hashing_are_server_faults() {
        assert!(!is_server_fault(&ServiceError::Validation("name")));
        assert!(!is_server_fault(&ServiceError::DuplicateEmail));
        assert!(!is_server_fault(&ServiceError::NotFound));
        assert!(!is_server_fault(&ServiceError::Auth));
        assert!(is_server_fault(&ServiceError::Store(StoreError::Database(
            "disk I/O error".into()
        ))));
        assert_eq!(error_class(&ServiceError::DuplicateEmail), "duplicate_email");
    }

    #[test]
    fn write_failures_keep_status_ok() {
        let (status, Json(body)) = write_failure(
            "create_post",
            ServiceError::Store(StoreError::ForeignKeyViolation("FOREIGN KEY constraint failed".into())),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ApiResponse::failed());
    }

    #[test]
    fn failed_listing_degrades_to_empty() {
        let failed: Result<Vec<PostView>, ServiceError> =
            Err(ServiceError::Store(StoreError::Database("no such table".into())));
        let items: Vec<PostItem> = degrade_to_empty("list_posts", failed);
        assert!(items.is_empty());
    }

    #[test]
    fn successful_listing_maps_rows() {
        let ok: Result<Vec<PostView>, ServiceError> = Ok(vec![PostView {
            id: 2,
            content: "hola".into(),
            created_at: "2024-01-01 00:00:00".into(),
            author_name: "Ana".into(),
        }]);
        let items: Vec<PostItem> = degrade_to_empty("list_posts", ok);
        assert_eq!(
            items,
            vec![PostItem {
                id: 2,
                contenido: "hola".into(),
                fecha: "2024-01-01 00:00:00".into(),
                nombre: "Ana".into(),
            }]
        );
    }
}
