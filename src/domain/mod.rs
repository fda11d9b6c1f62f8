mod feed;
mod report;
mod source;
pub(crate) mod storage;

pub(crate) use feed::is_truthy;
pub use feed::{
    Activity, DecodeError, FeedEntry, FeedPage, GameDetails, ACTIVITY_GROUP, COMPLETED_GAME,
    STANDARD_MODE,
};
pub use report::{MapCounter, MapTally, Progress, Report, TOP_MAPS_LIMIT};
pub use source::FeedSource;
pub use storage::ReportStore;
