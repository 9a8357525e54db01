pub mod sqlite;

pub use sqlite::{now_timestamp, Store, StoreError};
