use crate::app::ServiceError;
use crate::transport::http::handlers::common::{
    envelope_failure, json_rejected, log_failure, MSG_DUPLICATE_EMAIL, MSG_LOGIN_STORE_FAILURE,
    MSG_MISSING_FIELDS, MSG_REGISTER_STORE_FAILURE, MSG_UNKNOWN_MEMBER, MSG_WRONG_PASSWORD,
};
use crate::transport::http::types::{
    ApiResponse, AppState, LoginRequest, MemberLookupResponse, RegisterRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/registro",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "`{success:true,id}`, or `{success:false,message}` for missing fields, a taken email or a database failure", body = ApiResponse)
    )
)]
pub async fn register_handler(
    State(state): State<AppState>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_rejected("register", e, Some(MSG_MISSING_FIELDS)).into_response(),
    };

    let result = state
        .accounts
        .register(
            request.nombre.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(id) => (StatusCode::OK, Json(ApiResponse::created(id))).into_response(),
        Err(err) => {
            let message = match &err {
                ServiceError::Validation(_) => MSG_MISSING_FIELDS,
                ServiceError::DuplicateEmail => MSG_DUPLICATE_EMAIL,
                _ => MSG_REGISTER_STORE_FAILURE,
            };
            log_failure("register", &err);
            envelope_failure(ApiResponse::failed_with(message)).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "`{success:true,id,nombre}`, or `{success:false,message}` for missing fields, an unknown email, a wrong password or a database failure", body = ApiResponse)
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_rejected("login", e, Some(MSG_MISSING_FIELDS)).into_response(),
    };

    let result = state
        .accounts
        .login(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(member) => (
            StatusCode::OK,
            Json(ApiResponse::logged_in(member.id, member.name)),
        )
            .into_response(),
        Err(err) => {
            let message = match &err {
                ServiceError::Validation(_) => MSG_MISSING_FIELDS,
                ServiceError::NotFound => MSG_UNKNOWN_MEMBER,
                ServiceError::Auth => MSG_WRONG_PASSWORD,
                _ => MSG_LOGIN_STORE_FAILURE,
            };
            log_failure("login", &err);
            envelope_failure(ApiResponse::failed_with(message)).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/buscar-usuario/{nombre}",
    params(
        ("nombre" = String, Path, description = "Exact, case-sensitive member name")
    ),
    responses(
        (status = 200, description = "Lookup result; `exists` is false when absent", body = MemberLookupResponse)
    )
)]
pub async fn find_member_handler(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> impl IntoResponse {
    let found = match state.accounts.find_by_name(&nombre).await {
        Ok(found) => found,
        Err(err) => {
            log_failure("find_member", &err);
            None
        }
    };

    let body = match found {
        Some(member) => MemberLookupResponse {
            exists: true,
            id: Some(member.id),
            nombre: Some(member.name),
        },
        None => MemberLookupResponse {
            exists: false,
            id: None,
            nombre: None,
        },
    };
    (StatusCode::OK, Json(body))
}
