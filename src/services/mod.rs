pub mod aggregation;
pub mod progress;
pub mod render;
pub mod wrapped_service;

pub use aggregation::FeedAggregator;
pub use wrapped_service::WrappedService;
