use crate::domain::storage::{ReportStore, StorageKeys};
use crate::domain::Report;
use crate::error::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<PathBuf> {
        self.ensure_dir(&self.data_dir)?;

        let path = self.get_path_for_key(key);
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)?;
        Ok(path)
    }
}

impl ReportStore for FileSystemStore {
    fn save_report(&self, report: &Report) -> Result<PathBuf> {
        let key = format!(
            "{}_{}_{}",
            StorageKeys::REPORT_PREFIX,
            report.year,
            Utc::now().timestamp()
        );
        let path = self.write_json_file(&key, report)?;
        info!("Saved report to {:?}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MapTally;

    #[test]
    fn test_save_report_creates_dir_and_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path().join("nested"));

        let mut tally = MapTally::default();
        tally.record("world", "World");
        tally.record("world", "World");
        let report = tally.into_report(2025);

        let path = store.save_report(&report).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("wrapped_2025_"));
        assert!(name.ends_with(".json"));

        let saved: Report = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.total_games, 2);
        assert_eq!(saved.all_maps, report.all_maps);
    }
}
