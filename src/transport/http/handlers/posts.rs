use crate::transport::http::handlers::common::{degrade_to_empty, json_rejected, write_failure};
use crate::transport::http::types::{ApiResponse, AppState, CreatePostRequest, PostItem};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/publicar",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "`{success:true,id}`, or `{success:false}` when a field is missing or the author is unknown", body = ApiResponse)
    )
)]
pub async fn create_post_handler(
    State(state): State<AppState>,
    request: Result<Json<CreatePostRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_rejected("create_post", e, None).into_response(),
    };

    match state
        .feed
        .create_post(
            request.usuario_id.unwrap_or_default(),
            request.contenido.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(id) => (StatusCode::OK, Json(ApiResponse::created(id))).into_response(),
        Err(err) => write_failure("create_post", err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/publicaciones",
    responses(
        (status = 200, description = "All posts, newest first (empty on failure)", body = [PostItem])
    )
)]
pub async fn list_posts_handler(State(state): State<AppState>) -> impl IntoResponse {
    let posts: Vec<PostItem> = degrade_to_empty("list_posts", state.feed.list_posts().await);
    Json(posts)
}
