pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{AccountService, CommentService, FeedService, ServiceError};
pub use crypto::{hash_password, verify_password};
pub use domain::{CommentView, MemberSummary, PostView};
pub use storage::{Store, StoreError};
