use crate::transport::http::handlers::common::{degrade_to_empty, json_rejected, write_failure};
use crate::transport::http::types::{
    ApiResponse, AppState, CommentItem, CreateCommentRequest, CreateProfileCommentRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/comentar",
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "`{success:true,id}`, or `{success:false}` when a field is missing or the member/post is unknown", body = ApiResponse)
    )
)]
pub async fn create_comment_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_rejected("create_comment", e, None).into_response(),
    };

    match state
        .comments
        .create_comment(
            request.usuario_id.unwrap_or_default(),
            request.publicacion_id.unwrap_or_default(),
            request.comentario.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(id) => (StatusCode::OK, Json(ApiResponse::created(id))).into_response(),
        Err(err) => write_failure("create_comment", err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/comentarios/{id}",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Comments on the post, newest first (empty on failure)", body = [CommentItem])
    )
)]
pub async fn list_post_comments_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // A non-numeric id cannot match any post.
    let comments: Vec<CommentItem> = match id.trim().parse::<i64>() {
        Ok(post_id) => degrade_to_empty(
            "list_post_comments",
            state.comments.list_comments_for_post(post_id).await,
        ),
        Err(_) => Vec::new(),
    };
    Json(comments)
}

#[utoipa::path(
    post,
    path = "/api/comentario-sobre-mi",
    request_body = CreateProfileCommentRequest,
    responses(
        (status = 200, description = "`{success:true,id}`, or `{success:false}` when a field is missing or the member is unknown", body = ApiResponse)
    )
)]
pub async fn create_profile_comment_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateProfileCommentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_rejected("create_profile_comment", e, None).into_response(),
    };

    match state
        .comments
        .create_profile_comment(
            request.usuario_id.unwrap_or_default(),
            request.comentario.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(id) => (StatusCode::OK, Json(ApiResponse::created(id))).into_response(),
        Err(err) => write_failure("create_profile_comment", err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/comentarios-sobre-mi",
    responses(
        (status = 200, description = "Every profile comment, newest first (empty on failure)", body = [CommentItem])
    )
)]
pub async fn list_profile_comments_handler(State(state): State<AppState>) -> impl IntoResponse {
    let comments: Vec<CommentItem> = degrade_to_empty(
        "list_profile_comments",
        state.comments.list_profile_comments().await,
    );
    Json(comments)
}
