use crate::transport::http::handlers::{accounts, comments, health, posts};
use crate::transport::http::types::{
    ApiResponse, CommentItem, CreateCommentRequest, CreatePostRequest,
    CreateProfileCommentRequest, HealthResponse, LoginRequest, MemberLookupResponse, PostItem,
    RegisterRequest,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        accounts::register_handler,
        accounts::login_handler,
        accounts::find_member_handler,
        posts::create_post_handler,
        posts::list_posts_handler,
        comments::create_comment_handler,
        comments::list_post_comments_handler,
        comments::create_profile_comment_handler,
        comments::list_profile_comments_handler
    ),
    components(schemas(
        ApiResponse,
        HealthResponse,
        RegisterRequest,
        LoginRequest,
        MemberLookupResponse,
        CreatePostRequest,
        PostItem,
        CreateCommentRequest,
        CreateProfileCommentRequest,
        CommentItem
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/registro", post(accounts::register_handler))
        .route("/api/login", post(accounts::login_handler))
        .route("/api/buscar-usuario/:nombre", get(accounts::find_member_handler))
        .route("/api/publicar", post(posts::create_post_handler))
        .route("/api/publicaciones", get(posts::list_posts_handler))
        .route("/api/comentar", post(comments::create_comment_handler))
        .route("/api/comentarios/:id", get(comments::list_post_comments_handler))
        .route(
            "/api/comentario-sobre-mi",
            post(comments::create_profile_comment_handler),
        )
        .route(
            "/api/comentarios-sobre-mi",
            get(comments::list_profile_comments_handler),
        )
        .with_state(app_state)
}

/// Any origin, method and header, for the browser client served from elsewhere.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
