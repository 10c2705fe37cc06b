//! Session cache for loaded datasets, keyed on source identity.
//!
//! Re-opening an unchanged file returns the already-parsed dataset. Any
//! change to the file's size or modification time produces a new key, so
//! the next request reloads from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use moka::sync::Cache;

use super::loader::load_file;
use super::model::PaperDataset;
use crate::error::LoadError;

/// How many distinct sources to keep parsed at once.
pub const DEFAULT_MAX_SOURCES: u64 = 4;

/// Identity of a source file at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl SourceKey {
    /// Stat `path`. Fails with `SourceUnavailable` if it cannot be resolved.
    pub fn of(path: &Path) -> Result<Self, LoadError> {
        let canonical = path
            .canonicalize()
            .map_err(|e| LoadError::unavailable(path, e))?;
        let meta = std::fs::metadata(&canonical).map_err(|e| LoadError::unavailable(path, e))?;
        Ok(SourceKey {
            path: canonical,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Memoizes [`load_file`] per source identity. Failed loads are not cached.
#[derive(Clone)]
pub struct DatasetCache {
    inner: Cache<SourceKey, Arc<PaperDataset>>,
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SOURCES)
    }
}

impl DatasetCache {
    pub fn new(max_sources: u64) -> Self {
        Self {
            inner: Cache::new(max_sources),
        }
    }

    /// Return the cached dataset for `path`, loading it if the file is new
    /// or has changed since it was last read.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<PaperDataset>, LoadError> {
        let key = SourceKey::of(path)?;
        if let Some(dataset) = self.inner.get(&key) {
            log::debug!("cache hit for {}", path.display());
            return Ok(dataset);
        }

        // Drop any stale version of the same file before loading the new one.
        self.invalidate(path);
        let dataset = Arc::new(load_file(path)?);
        self.inner.insert(key, Arc::clone(&dataset));
        log::debug!(
            "cached {} ({} source(s) held)",
            path.display(),
            self.entry_count()
        );
        Ok(dataset)
    }

    /// Forget every cached version of `path`.
    pub fn invalidate(&self, path: &Path) {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let stale: Vec<Arc<SourceKey>> = self
            .inner
            .iter()
            .map(|(key, _)| key)
            .filter(|key| key.path == canonical)
            .collect();
        for key in stale {
            self.inner.invalidate(key.as_ref());
        }
    }

    /// Number of cached datasets.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str = "title,abstract,authors,journal,publish_time\n";

    fn write_csv(dir: &TempDir, rows: &str) -> PathBuf {
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
        path
    }

    #[test]
    fn unchanged_source_is_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "T,A,,J,2020\n");
        let cache = DatasetCache::default();

        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn changed_source_is_reloaded() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "T,A,,J,2020\n");
        let cache = DatasetCache::default();
        let first = cache.get_or_load(&path).unwrap();
        assert_eq!(first.len(), 1);

        write_csv(&dir, "T,A,,J,2020\nU,B,,K,2021\n");
        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(second.len(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn invalidate_forces_reload() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "T,A,,J,2020\n");
        let cache = DatasetCache::default();
        let first = cache.get_or_load(&path).unwrap();

        cache.invalidate(&path);
        assert_eq!(cache.entry_count(), 0);
        let second = cache.get_or_load(&path).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let cache = DatasetCache::default();
        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            cache.get_or_load(&missing),
            Err(LoadError::SourceUnavailable { .. })
        ));

        let bad = dir.path().join("bad.csv");
        std::fs::write(&bad, "title\nx\n").unwrap();
        assert!(matches!(cache.get_or_load(&bad), Err(LoadError::Schema { .. })));
        assert_eq!(cache.entry_count(), 0);
    }
}
