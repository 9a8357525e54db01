pub mod router;
pub mod types;
pub mod handlers {
    pub mod accounts;
    pub mod comments;
    pub mod common;
    pub mod health;
    pub mod posts;
}

pub use router::{cors_layer, create_router, ApiDoc};
pub use types::AppState;
