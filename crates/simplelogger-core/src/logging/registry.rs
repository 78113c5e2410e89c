//! Weak cache of file loggers keyed by file name
//!
//! The registry never keeps a logger alive on its own: entries are `Weak`,
//! so once every caller has dropped its `Arc` the logger (and its file handle)
//! is released and the next lookup builds a fresh one.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::file_logger::FileLogger;

/// Registry guaranteeing one live `FileLogger` per file name
#[derive(Debug, Default)]
pub struct FileLoggerRegistry {
    loggers: Mutex<HashMap<String, Weak<FileLogger>>>,
}

impl FileLoggerRegistry {
    pub fn new() -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Return the live logger for `name`, or build one with `create`
    ///
    /// Lookup and insertion happen under one lock, so concurrent callers for
    /// the same name never construct two loggers.
    pub fn get_or_create<F>(&self, name: &str, create: F) -> Arc<FileLogger>
    where
        F: FnOnce() -> FileLogger,
    {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name).and_then(Weak::upgrade) {
            return logger;
        }

        loggers.retain(|_, weak| weak.strong_count() > 0);
        let logger = Arc::new(create());
        loggers.insert(name.to_string(), Arc::downgrade(&logger));
        logger
    }

    /// Return the live logger for `name` without creating one
    pub fn get(&self, name: &str) -> Option<Arc<FileLogger>> {
        self.loggers.lock().get(name).and_then(Weak::upgrade)
    }

    /// Number of loggers still held by someone
    pub fn len(&self) -> usize {
        self.loggers
            .lock()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::storage::StorageProbe;
    use crate::logging::LogLevel;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use tempfile::tempdir;

    fn build(dir: &Path, name: &str) -> FileLogger {
        let probe: Arc<dyn StorageProbe> = Arc::new(|| true);
        FileLogger::open(dir.join(name), LogLevel::Verbose, true, probe)
    }

    #[test]
    fn test_same_name_same_instance() {
        let dir = tempdir().unwrap();
        let registry = FileLoggerRegistry::new();

        let a = registry.get_or_create("a.log", || build(dir.path(), "a.log"));
        let b = registry.get_or_create("a.log", || panic!("must reuse the live logger"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_different_names_different_instances() {
        let dir = tempdir().unwrap();
        let registry = FileLoggerRegistry::new();

        let a = registry.get_or_create("a.log", || build(dir.path(), "a.log"));
        let b = registry.get_or_create("b.log", || build(dir.path(), "b.log"));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_does_not_keep_loggers_alive() {
        let dir = tempdir().unwrap();
        let registry = FileLoggerRegistry::new();
        let created = AtomicUsize::new(0);

        let first = registry.get_or_create("a.log", || {
            created.fetch_add(1, Ordering::SeqCst);
            build(dir.path(), "a.log")
        });
        let weak = Arc::downgrade(&first);
        drop(first);

        assert!(weak.upgrade().is_none());
        assert!(registry.get("a.log").is_none());
        assert!(registry.is_empty());

        let second = registry.get_or_create("a.log", || {
            created.fetch_add(1, Ordering::SeqCst);
            build(dir.path(), "a.log")
        });
        assert_eq!(created.load(Ordering::SeqCst), 2);
        assert!(second.is_open());
    }

    #[test]
    fn test_concurrent_lookups_construct_once() {
        let dir = tempdir().unwrap();
        let registry = Arc::new(FileLoggerRegistry::new());
        let created = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));
        let mut handles = vec![];

        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            let created = Arc::clone(&created);
            let barrier = Arc::clone(&barrier);
            let dir = dir.path().to_path_buf();
            handles.push(thread::spawn(move || {
                barrier.wait();
                registry.get_or_create("shared.log", || {
                    created.fetch_add(1, Ordering::SeqCst);
                    build(&dir, "shared.log")
                })
            }));
        }

        let loggers: Vec<Arc<FileLogger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert!(loggers.iter().all(|l| Arc::ptr_eq(l, &loggers[0])));
    }

    #[test]
    fn test_dead_entries_are_pruned() {
        let dir = tempdir().unwrap();
        let registry = FileLoggerRegistry::new();

        drop(registry.get_or_create("old.log", || build(dir.path(), "old.log")));
        let _live = registry.get_or_create("new.log", || build(dir.path(), "new.log"));

        assert_eq!(registry.loggers.lock().len(), 1);
        assert!(registry.get("new.log").is_some());
    }
}
