pub mod config;
pub mod example_flow;
pub mod fs_ops;
pub mod logger;
pub mod store;
pub mod utils;

pub use fs_ops::fs_error::FsError;
pub use store::record::{Record, ID_FIELD};
pub use store::record_store::RecordStore;
pub use store::record_store_trait::RecordStoreTrait;
