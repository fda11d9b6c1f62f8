mod clients;
mod storage;

pub use clients::feed::FeedClient;
pub use storage::fs_store::FileSystemStore;
