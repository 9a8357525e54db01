use crate::app::{AccountService, CommentService, FeedService};
use crate::domain::{CommentView, PostView};
use crate::storage::Store;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub accounts: AccountService,
    pub feed: FeedService,
    pub comments: CommentService,
}

impl AppState {
    /// Wires every service to the same store handle.
    pub fn new(store: Store) -> Self {
        Self {
            accounts: AccountService::new(store.clone()),
            feed: FeedService::new(store.clone()),
            comments: CommentService::new(store.clone()),
            store,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests. Every field is optional on the wire: absence is reported as a
// validation failure inside the envelope rather than as a body rejection.
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreatePostRequest {
    /// Author id; a number or a numeric string.
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub contenido: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub usuario_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub publicacion_id: Option<i64>,
    #[serde(default)]
    pub comentario: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateProfileCommentRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub comentario: Option<String>,
}

/// Accepts `3`, `"3"`, `null` or anything else; only integers survive.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Envelope for every write and for login.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn created(id: i64) -> Self {
        Self {
            success: true,
            id: Some(id),
            nombre: None,
            message: None,
        }
    }

    pub fn logged_in(id: i64, nombre: String) -> Self {
        Self {
            success: true,
            id: Some(id),
            nombre: Some(nombre),
            message: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            id: None,
            nombre: None,
            message: None,
        }
    }

    pub fn failed_with(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::failed()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MemberLookupResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct PostItem {
    pub id: i64,
    pub contenido: String,
    pub fecha: String,
    pub nombre: String,
}

impl From<PostView> for PostItem {
    fn from(post: PostView) -> Self {
        Self {
            id: post.id,
            contenido: post.content,
            fecha: post.created_at,
            nombre: post.author_name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct CommentItem {
    pub id: i64,
    pub comentario: String,
    pub fecha: String,
    pub nombre: String,
}

impl From<CommentView> for CommentItem {
    fn from(comment: CommentView) -> Self {
        Self {
            id: comment.id,
            comentario: comment.text,
            fecha: comment.created_at,
            nombre: comment.author_name,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
