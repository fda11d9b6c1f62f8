use super::Report;
use crate::error::Result;
use std::path::PathBuf;

pub trait ReportStore: Send + Sync {
    /// Writes the report and returns where it landed.
    fn save_report(&self, report: &Report) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const REPORT_PREFIX: &'static str = "wrapped";
}
