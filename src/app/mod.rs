pub mod account_service;
pub mod comment_service;
pub mod error;
pub mod feed_service;

pub use account_service::AccountService;
pub use comment_service::CommentService;
pub use error::{ServiceError, ServiceResult};
pub use feed_service::FeedService;
