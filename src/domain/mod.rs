pub mod model;

pub use model::{CommentView, MemberSummary, PostView};
