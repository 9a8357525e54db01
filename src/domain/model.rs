//! Read models returned by the services.
//!
//! Field names here are the crate's own; the SQL queries alias the stored column
//! names onto them, and the HTTP layer maps them onto the wire names.

use sqlx::FromRow;

/// A member as exposed outside the account service. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MemberSummary {
    pub id: i64,
    pub name: String,
}

/// A post joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PostView {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub author_name: String,
}

/// A post comment or profile comment joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CommentView {
    pub id: i64,
    pub text: String,
    pub created_at: String,
    pub author_name: String,
}

/// Row used internally by login; holds the stored hash.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct MemberCredentials {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
}
